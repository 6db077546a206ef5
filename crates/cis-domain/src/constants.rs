//! Domain constants
//!
//! Values shared by every layer: cookie naming, navigation paths and the
//! source types that never appear on the dashboard.

use crate::value_objects::SourceType;

/// Cookie holding the serialized expand/collapse map
pub const TOGGLED_CONNECTORS_COOKIE_NAME: &str = "toggled_connectors_indexing_page";

/// Path prefix for the connector (CC pair) detail view
pub const CONNECTOR_DETAIL_PATH_PREFIX: &str = "/admin/connector";

/// Path prefix for the federated connector detail view
pub const FEDERATED_DETAIL_PATH_PREFIX: &str = "/admin/federated";

/// Sources that are internal bookkeeping and never rendered as a group
pub const DEFAULT_HIDDEN_SOURCES: [SourceType; 2] =
    [SourceType::NotApplicable, SourceType::IngestionApi];

/// Navigation target for a regular connector row
pub fn connector_detail_path(cc_pair_id: i64) -> String {
    format!("{CONNECTOR_DETAIL_PATH_PREFIX}/{cc_pair_id}")
}

/// Navigation target for a federated connector row
pub fn federated_detail_path(id: i64) -> String {
    format!("{FEDERATED_DETAIL_PATH_PREFIX}/{id}")
}
