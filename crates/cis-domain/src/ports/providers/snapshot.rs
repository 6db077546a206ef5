//! Indexing Snapshot Source Port
//!
//! The data-fetch layer. The dashboard never fetches on its own; it asks
//! this port for the current snapshot and renders it as-is.

use crate::entities::IndexingSnapshot;
use crate::error::Result;

/// Supplier of connector status snapshots
pub trait IndexingSnapshotSource: Send + Sync {
    /// Current snapshot of every connector list
    fn load_snapshot(&self) -> Result<IndexingSnapshot>;
}
