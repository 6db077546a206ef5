//! Domain Ports
//!
//! Contracts for the collaborators the dashboard depends on but does not own.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`ToggleStateStore`] | Single named value holding the expand/collapse map |
//! | [`FeatureFlagProvider`] | Whether enterprise-only columns render |
//! | [`IndexingSnapshotSource`] | Data-fetch layer supplying connector records |
//! | [`SourceCatalog`] | Display names, icons and federated source mapping |

/// Infrastructure ports (persistence, feature flags)
pub mod infrastructure;
/// Provider ports (data and metadata suppliers)
pub mod providers;

pub use infrastructure::{FeatureFlagProvider, ToggleStateStore};
pub use providers::{IndexingSnapshotSource, SourceCatalog};
