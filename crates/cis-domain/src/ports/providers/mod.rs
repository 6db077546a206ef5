//! Provider ports

/// Snapshot source port
pub mod snapshot;
/// Source catalog port
pub mod source_catalog;

pub use snapshot::IndexingSnapshotSource;
pub use source_catalog::SourceCatalog;
