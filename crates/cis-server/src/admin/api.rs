//! JSON endpoints
//!
//! - `GET /api/indexing/status` - computed view and table (admin key)
//! - `GET /admin/connector/<id>` - connector drill-down
//! - `GET /admin/federated/<id>` - federated connector drill-down
//! - `GET /live` - liveness probe

use std::collections::BTreeMap;

use cis_application::{
    AccessBadge, DisplayStateController, FilteredGroups, StatusBadge, StatusTable,
};
use cis_domain::entities::{ConnectorIndexingStatus, FederatedConnectorDetail, IndexingSnapshot};
use cis_domain::value_objects::{ConnectorSummary, FilterOptions, SourceType};
use rocket::http::{CookieJar, Status};
use rocket::serde::json::Json;
use rocket::{Request, Route, State, catch, get, routes};
use serde::Serialize;

use super::auth::{AdminAuth, AuthErrorResponse, cached_auth_error};
use super::query::ViewQuery;
use super::state::DashboardState;

/// Error body of the JSON endpoints
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error type
    pub error: &'static str,
    /// Error message
    pub message: String,
    /// HTTP status code
    pub code: u16,
}

/// Error response of the JSON endpoints
pub type ApiResult<T> = Result<Json<T>, (Status, Json<ApiError>)>;

impl ApiError {
    fn respond(
        status: Status,
        error: &'static str,
        message: impl Into<String>,
    ) -> (Status, Json<Self>) {
        (
            status,
            Json(Self {
                error,
                message: message.into(),
                code: status.code,
            }),
        )
    }

    /// Unknown record
    pub fn not_found(message: impl Into<String>) -> (Status, Json<Self>) {
        Self::respond(Status::NotFound, "not_found", message)
    }

    /// Snapshot could not be loaded
    pub fn snapshot_unavailable(error: &cis_domain::Error) -> (Status, Json<Self>) {
        tracing::error!(error = %error, "Failed to load indexing snapshot");
        Self::respond(
            Status::InternalServerError,
            "snapshot_unavailable",
            error.to_string(),
        )
    }
}

/// Computed dashboard view
#[derive(Debug, Serialize)]
pub struct IndexingStatusResponse {
    /// Filters as parsed from the query
    pub filters: FilterOptions,
    /// Whether any filter is active
    pub filters_active: bool,
    /// Search text
    pub search: String,
    /// Grouped sources, sorted
    pub sorted_sources: Vec<SourceType>,
    /// Summary per source
    pub summaries: BTreeMap<SourceType, ConnectorSummary>,
    /// Records that passed the filters, per source
    pub filtered_groups: FilteredGroups,
    /// Sources in display order, before hidden sources and search
    pub display_sources: Vec<SourceType>,
    /// Sources the filter endpoint would expand
    pub sources_to_expand: Vec<SourceType>,
    /// Table as rendered with the caller's toggle cookie
    pub table: StatusTable,
}

/// Connector drill-down
#[derive(Debug, Serialize)]
pub struct ConnectorDetailResponse {
    /// The record
    pub connector: ConnectorIndexingStatus,
    /// Whether the viewer may manage it
    pub editable: bool,
    /// Status badge
    pub status: StatusBadge,
    /// Permissions badge
    pub access: AccessBadge,
}

/// Liveness probe body
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    /// Always `alive`
    pub status: &'static str,
}

fn load_snapshot(state: &DashboardState) -> Result<IndexingSnapshot, (Status, Json<ApiError>)> {
    state
        .load_snapshot()
        .map_err(|e| ApiError::snapshot_unavailable(&e))
}

/// Computed view as JSON
#[get("/api/indexing/status?<view..>")]
pub fn indexing_status(
    _auth: AdminAuth,
    view: ViewQuery,
    jar: &CookieJar<'_>,
    state: &State<DashboardState>,
) -> ApiResult<IndexingStatusResponse> {
    let snapshot = load_snapshot(state)?;
    let filters = view.filter_options();
    let computed = state.compute_view(&snapshot, &filters);
    let toggles = DisplayStateController::load(state.toggle_store(jar)).into_state();
    let table = state
        .table_builder()
        .build(&computed, &toggles, &view.search_matcher());

    Ok(Json(IndexingStatusResponse {
        filters_active: computed.filters_active,
        search: view.search_text().to_string(),
        sources_to_expand: computed.sources_to_expand(),
        display_sources: computed.display_sources(),
        sorted_sources: computed.sorted_sources,
        summaries: computed.summaries,
        filtered_groups: computed.filtered_groups,
        filters,
        table,
    }))
}

/// Connector drill-down
#[get("/admin/connector/<cc_pair_id>")]
pub fn connector_detail(
    cc_pair_id: i64,
    state: &State<DashboardState>,
) -> ApiResult<ConnectorDetailResponse> {
    let snapshot = load_snapshot(state)?;
    let connector = snapshot
        .find_connector(cc_pair_id)
        .ok_or_else(|| ApiError::not_found(format!("Connector {cc_pair_id} not found")))?;

    let editable = snapshot
        .editable_indexing_statuses
        .iter()
        .any(|status| status.cc_pair_id == cc_pair_id);

    Ok(Json(ConnectorDetailResponse {
        editable,
        status: StatusBadge::for_connector(connector),
        access: AccessBadge::for_connector(connector, state.catalog.as_ref()),
        connector: connector.clone(),
    }))
}

/// Federated connector drill-down
#[get("/admin/federated/<id>")]
pub fn federated_detail(
    id: i64,
    state: &State<DashboardState>,
) -> ApiResult<FederatedConnectorDetail> {
    let snapshot = load_snapshot(state)?;
    snapshot
        .find_federated(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Federated connector {id} not found")))
}

/// Liveness probe
#[get("/live")]
pub fn live() -> Json<LivenessResponse> {
    Json(LivenessResponse { status: "alive" })
}

/// Admin key missing or wrong
#[catch(401)]
pub fn unauthorized(request: &Request<'_>) -> (Status, Json<AuthErrorResponse>) {
    cached_auth_error(request).map_or_else(AuthErrorResponse::invalid_key, |error| {
        AuthErrorResponse::from_error(&error)
    })
}

/// Admin auth enabled without a key
#[catch(503)]
pub fn unavailable() -> (Status, Json<AuthErrorResponse>) {
    AuthErrorResponse::not_configured()
}

/// JSON routes
pub fn api_routes() -> Vec<Route> {
    routes![indexing_status, connector_detail, federated_detail, live]
}
