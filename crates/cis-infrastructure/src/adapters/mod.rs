//! Port adapters
//!
//! | Adapter | Port |
//! |---------|------|
//! | [`JsonFileSnapshotSource`] | `IndexingSnapshotSource`, re-reads a JSON file per call |
//! | [`InMemorySnapshotSource`] | `IndexingSnapshotSource`, fixed snapshot |
//! | [`StaticSourceCatalog`] | `SourceCatalog`, compiled-in names and icons |
//! | [`ConfigFeatureFlags`] | `FeatureFlagProvider`, backed by `features` config |
//! | [`InMemoryToggleStore`] | `ToggleStateStore`, process-local value |

pub mod catalog;
pub mod feature_flags;
pub mod snapshot;
pub mod toggle_store;

pub use catalog::StaticSourceCatalog;
pub use feature_flags::ConfigFeatureFlags;
pub use snapshot::{InMemorySnapshotSource, JsonFileSnapshotSource};
pub use toggle_store::InMemoryToggleStore;
