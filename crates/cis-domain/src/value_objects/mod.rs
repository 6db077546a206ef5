//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`SourceType`] | Upstream system a connector indexes |
//! | [`FederatedSourceType`] | Upstream system of a federated connector |
//! | [`AccessType`] | Visibility scope of indexed content |
//! | [`IndexingStatus`] | Outcome of an index attempt |
//! | [`CcPairStatus`] | Overall connector/credential pair state |
//! | [`FilterOptions`] | User-controlled dashboard filters |
//! | [`ConnectorSummary`] | Aggregate counts for one source group |
//! | [`ToggleState`] | Expand/collapse map persisted in a cookie |

/// Dashboard filter value objects
pub mod filter;
/// Source type value objects
pub mod source;
/// Backend status enumerations
pub mod status;
/// Source group summary
pub mod summary;
/// Expand/collapse state
pub mod toggle;

// Re-export commonly used value objects
pub use filter::{ComparisonOperator, DocsCountFilter, FilterOptions};
pub use source::{FederatedSourceType, SourceType};
pub use status::{AccessType, CcPairStatus, IndexingStatus};
pub use summary::ConnectorSummary;
pub use toggle::ToggleState;
