//! Input snapshot handed over by the data-fetch layer

use serde::{Deserialize, Serialize};

use super::connector::{ConnectorIndexingStatus, FederatedConnectorDetail};

/// Everything the dashboard renders, captured at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexingSnapshot {
    /// Every connector the viewer can see
    #[serde(default)]
    pub indexing_statuses: Vec<ConnectorIndexingStatus>,
    /// Connectors the viewer may manage
    #[serde(default)]
    pub editable_indexing_statuses: Vec<ConnectorIndexingStatus>,
    /// Federated connectors
    #[serde(default)]
    pub federated_connectors: Vec<FederatedConnectorDetail>,
}

impl IndexingSnapshot {
    /// Create a snapshot from its three lists
    pub fn new(
        indexing_statuses: Vec<ConnectorIndexingStatus>,
        editable_indexing_statuses: Vec<ConnectorIndexingStatus>,
        federated_connectors: Vec<FederatedConnectorDetail>,
    ) -> Self {
        Self {
            indexing_statuses,
            editable_indexing_statuses,
            federated_connectors,
        }
    }

    /// Look up a connector by CC pair id, editable copy first
    pub fn find_connector(&self, cc_pair_id: i64) -> Option<&ConnectorIndexingStatus> {
        self.editable_indexing_statuses
            .iter()
            .chain(self.indexing_statuses.iter())
            .find(|status| status.cc_pair_id == cc_pair_id)
    }

    /// Look up a federated connector by id
    pub fn find_federated(&self, id: i64) -> Option<&FederatedConnectorDetail> {
        self.federated_connectors
            .iter()
            .find(|connector| connector.id == id)
    }
}
