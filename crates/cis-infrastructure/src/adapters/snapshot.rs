//! Snapshot source adapters

use std::path::{Path, PathBuf};

use cis_domain::entities::IndexingSnapshot;
use cis_domain::error::Result;
use cis_domain::ports::IndexingSnapshotSource;
use tracing::debug;

use crate::error_ext::ErrorContext;

/// Reads the snapshot from a JSON file on every call
///
/// The data-fetch layer rewrites the file; each request sees its latest
/// contents.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotSource {
    path: PathBuf,
}

impl JsonFileSnapshotSource {
    /// Create a source reading `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// File being read
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IndexingSnapshotSource for JsonFileSnapshotSource {
    fn load_snapshot(&self) -> Result<IndexingSnapshot> {
        let raw = std::fs::read_to_string(&self.path)
            .io_context(format!("Failed to read snapshot {}", self.path.display()))?;
        let snapshot: IndexingSnapshot = serde_json::from_str(&raw)?;
        debug!(
            path = %self.path.display(),
            statuses = snapshot.indexing_statuses.len(),
            editable = snapshot.editable_indexing_statuses.len(),
            federated = snapshot.federated_connectors.len(),
            "Loaded indexing snapshot"
        );
        Ok(snapshot)
    }
}

/// Serves a fixed snapshot
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotSource {
    snapshot: IndexingSnapshot,
}

impl InMemorySnapshotSource {
    /// Create a source returning `snapshot`
    pub fn new(snapshot: IndexingSnapshot) -> Self {
        Self { snapshot }
    }
}

impl IndexingSnapshotSource for InMemorySnapshotSource {
    fn load_snapshot(&self) -> Result<IndexingSnapshot> {
        Ok(self.snapshot.clone())
    }
}
