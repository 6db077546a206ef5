//! Per-source aggregate counts

use serde::{Deserialize, Serialize};

/// Aggregate counts for one source group
///
/// Derived on every recomputation and never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorSummary {
    /// Regular plus federated connectors
    pub count: usize,
    /// Active regular connectors plus every federated connector
    pub active: usize,
    /// Regular connectors with public access
    pub public: usize,
    /// Documents indexed by regular connectors
    pub total_docs_indexed: u64,
    /// Regular connectors whose last finished run failed
    pub errors: usize,
}

impl ConnectorSummary {
    /// Summary of a source that only has federated connectors
    pub fn federated_only(federated_count: usize) -> Self {
        Self {
            count: federated_count,
            active: federated_count,
            ..Self::default()
        }
    }

    /// Share of active connectors in percent, `None` for an empty group
    pub fn active_percentage(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some(self.active as f64 / self.count as f64 * 100.0)
    }
}
