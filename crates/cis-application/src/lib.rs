//! Application Layer - Connector Indexing Status
//!
//! Derives everything the indexing status dashboard shows from a snapshot of
//! connector records: per-source groups, summaries, filtered groups, search
//! matches and the expand/collapse state.
//!
//! ## Architecture
//!
//! The application layer:
//! - Contains the pure derivations (domain services)
//! - Assembles them into the rendered table (use cases)
//! - Talks to storage and metadata only through `cis-domain` ports
//! - Has no dependencies on infrastructure or web frameworks
//!
//! ## Use Cases
//!
//! - [`compute_view`]: grouping, summaries, filtering and source ordering
//! - [`StatusTableBuilder`]: sections and rows after search and toggles
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `cis-domain`: records, value objects and port traits
//! - Pure Rust libraries for serialization, logging and iteration

pub mod domain_services;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
