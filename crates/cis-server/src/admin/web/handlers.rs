//! Web Handlers Module
//!
//! HTML page and the form endpoints behind its buttons. Every form endpoint
//! updates the toggle cookie and redirects back to the page with the same
//! query string.

use chrono::Utc;
use cis_application::DisplayStateController;
use cis_domain::error::Error;
use cis_domain::value_objects::SourceType;
use rocket::form::Form;
use rocket::http::{ContentType, CookieJar, Status};
use rocket::response::Redirect;
use rocket::{State, get, post};

use super::HtmlResponse;
use super::builders::ViewModelBuilder;
use crate::admin::query::{ToggleForm, ViewQuery};
use crate::admin::state::DashboardState;
use crate::constants::{STATUS_PAGE_ID, STATUS_PAGE_PATH};

fn snapshot_error(state: &DashboardState, error: &Error) -> HtmlResponse {
    tracing::error!(error = %error, "Failed to load indexing snapshot");
    state.web.render_error(
        Status::InternalServerError,
        "Indexing Status Unavailable",
        &error.to_string(),
    )
}

fn persist_error(state: &DashboardState, error: &Error) -> HtmlResponse {
    tracing::error!(error = %error, "Failed to persist toggle state");
    state.web.render_error(
        Status::InternalServerError,
        "Display State Error",
        &error.to_string(),
    )
}

/// Indexing status page
#[get("/admin/indexing/status?<view..>")]
pub fn status_page(
    view: ViewQuery,
    jar: &CookieJar<'_>,
    state: &State<DashboardState>,
) -> HtmlResponse {
    let snapshot = match state.load_snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => return snapshot_error(state, &e),
    };

    let computed = state.compute_view(&snapshot, &view.filter_options());
    let controller = DisplayStateController::load(state.toggle_store(jar));
    let table = state
        .table_builder()
        .build(&computed, controller.state(), &view.search_matcher());

    let view_model = ViewModelBuilder::new(&view, Utc::now()).build_status_page(&table);
    state
        .web
        .render_page("status.html", STATUS_PAGE_ID, &view_model)
}

/// Flip one source, or force it with `expanded`
#[post("/admin/indexing/status/toggle/<source>?<view..>", data = "<form>")]
pub fn toggle_source(
    source: &str,
    view: ViewQuery,
    form: Option<Form<ToggleForm>>,
    jar: &CookieJar<'_>,
    state: &State<DashboardState>,
) -> Result<Redirect, HtmlResponse> {
    let source: SourceType = source.parse().map_err(|e: Error| {
        state
            .web
            .render_error(Status::NotFound, "Unknown Source", &e.to_string())
    })?;
    let forced = form.and_then(|form| form.into_inner().expanded);

    let mut controller = DisplayStateController::load(state.toggle_store(jar));
    controller
        .toggle(source, forced)
        .map_err(|e| persist_error(state, &e))?;

    Ok(Redirect::to(view.href(STATUS_PAGE_PATH)))
}

/// Expand every source, or collapse every source once all are open
#[post("/admin/indexing/status/toggle-all?<view..>")]
pub fn toggle_all(
    view: ViewQuery,
    jar: &CookieJar<'_>,
    state: &State<DashboardState>,
) -> Result<Redirect, HtmlResponse> {
    let snapshot = state.load_snapshot().map_err(|e| snapshot_error(state, &e))?;
    let computed = state.compute_view(&snapshot, &view.filter_options());

    let mut controller = DisplayStateController::load(state.toggle_store(jar));
    controller
        .toggle_all(&computed.sorted_sources)
        .map_err(|e| persist_error(state, &e))?;

    Ok(Redirect::to(view.href(STATUS_PAGE_PATH)))
}

/// Apply the filter form
///
/// Sources that kept a record are expanded before redirecting to the page.
#[get("/admin/indexing/status/filter?<view..>")]
pub fn apply_filters(
    view: ViewQuery,
    jar: &CookieJar<'_>,
    state: &State<DashboardState>,
) -> Result<Redirect, HtmlResponse> {
    let snapshot = state.load_snapshot().map_err(|e| snapshot_error(state, &e))?;
    let computed = state.compute_view(&snapshot, &view.filter_options());

    let to_expand = computed.sources_to_expand();
    if !to_expand.is_empty() {
        let mut controller = DisplayStateController::load(state.toggle_store(jar));
        controller
            .expand_sources(&to_expand)
            .map_err(|e| persist_error(state, &e))?;
    }

    Ok(Redirect::to(view.href(STATUS_PAGE_PATH)))
}

/// Favicon handler - returns a simple SVG icon
#[get("/favicon.ico")]
pub fn favicon() -> (ContentType, &'static str) {
    (
        ContentType::SVG,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><text y=".9em" font-size="90">📊</text></svg>"#,
    )
}
