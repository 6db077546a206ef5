//! Infrastructure ports

/// Feature flag port
pub mod feature_flags;
/// Toggle state persistence port
pub mod toggle_store;

pub use feature_flags::FeatureFlagProvider;
pub use toggle_store::ToggleStateStore;
