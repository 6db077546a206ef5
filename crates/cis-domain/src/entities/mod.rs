//! Domain Entities
//!
//! Records with identity: connectors keyed by CC pair id, federated
//! connectors keyed by their own id.

/// Regular and federated connector records
pub mod connector;
/// Snapshot of every record the dashboard renders
pub mod snapshot;

pub use connector::{ConnectorIndexingStatus, FederatedConnectorDetail, IndexAttemptSnapshot};
pub use snapshot::IndexingSnapshot;
