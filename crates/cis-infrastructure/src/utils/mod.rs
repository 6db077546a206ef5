//! Shared utilities

pub mod formatting;

pub use formatting::FormattingUtils;
