//! Connector records supplied by the indexing backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{AccessType, CcPairStatus, FederatedSourceType, IndexingStatus, SourceType};

/// Latest index attempt of a connector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexAttemptSnapshot {
    /// Attempt identifier
    pub id: i64,
    /// Attempt outcome so far
    pub status: IndexingStatus,
}

/// Current indexing state of one regular connector (CC pair)
///
/// Treated as an immutable snapshot owned by the data-fetch layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorIndexingStatus {
    /// Connector/credential pair identifier
    pub cc_pair_id: i64,
    /// Display name
    pub name: String,
    /// Upstream source type
    pub source: SourceType,
    /// Visibility of indexed content
    pub access_type: AccessType,
    /// Time of the last successful run
    #[serde(default)]
    pub last_success: Option<DateTime<Utc>>,
    /// Outcome of the most recent attempt, finished or not
    #[serde(default)]
    pub last_status: Option<IndexingStatus>,
    /// Outcome of the most recent finished attempt
    #[serde(default)]
    pub last_finished_status: Option<IndexingStatus>,
    /// Documents indexed over the connector's lifetime
    #[serde(default)]
    pub docs_indexed: u64,
    /// Overall pair status
    pub cc_pair_status: CcPairStatus,
    /// Whether recent attempts keep failing
    #[serde(default)]
    pub in_repeated_error_state: bool,
    /// Most recent attempt details
    #[serde(default)]
    pub latest_index_attempt: Option<IndexAttemptSnapshot>,
}

impl ConnectorIndexingStatus {
    /// Create a record with the mandatory fields; the rest start empty
    pub fn new(
        cc_pair_id: i64,
        name: impl Into<String>,
        source: SourceType,
        access_type: AccessType,
        cc_pair_status: CcPairStatus,
    ) -> Self {
        Self {
            cc_pair_id,
            name: name.into(),
            source,
            access_type,
            last_success: None,
            last_status: None,
            last_finished_status: None,
            docs_indexed: 0,
            cc_pair_status,
            in_repeated_error_state: false,
            latest_index_attempt: None,
        }
    }

    /// Whether the pair is indexing on schedule
    pub fn is_active(&self) -> bool {
        self.cc_pair_status == CcPairStatus::Active
    }

    /// Whether the last finished run failed
    pub fn last_run_failed(&self) -> bool {
        self.last_finished_status == Some(IndexingStatus::Failed)
    }

    /// Pair status to display
    ///
    /// Until a run has finished the backend status is not meaningful: a
    /// connector that has not started is scheduled, anything else is doing
    /// its initial indexing.
    pub fn effective_status(&self) -> CcPairStatus {
        if self.last_finished_status.is_some() {
            self.cc_pair_status
        } else if self.last_status == Some(IndexingStatus::NotStarted) {
            CcPairStatus::Scheduled
        } else {
            CcPairStatus::InitialIndexing
        }
    }
}

/// A connector whose documents are searched live at the source
///
/// Always active and indexed; it has no run history or document count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederatedConnectorDetail {
    /// Federated connector identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Federated source type
    pub source: FederatedSourceType,
}

impl FederatedConnectorDetail {
    /// Create a federated connector record
    pub fn new(id: i64, name: impl Into<String>, source: FederatedSourceType) -> Self {
        Self {
            id,
            name: name.into(),
            source,
        }
    }
}
