//! Web Router Module

use rocket::{Route, routes};

use super::handlers;

/// Web UI routes
///
/// - GET `/admin/indexing/status` - Dashboard page
/// - POST `/admin/indexing/status/toggle/<source>` - Toggle one source
/// - POST `/admin/indexing/status/toggle-all` - Expand all / Collapse all
/// - GET `/admin/indexing/status/filter` - Apply filters, auto-expand
/// - GET `/favicon.ico` - Favicon
pub fn web_routes() -> Vec<Route> {
    routes![
        handlers::status_page,
        handlers::toggle_source,
        handlers::toggle_all,
        handlers::apply_filters,
        handlers::favicon,
    ]
}
