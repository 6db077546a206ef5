//! Server constants

/// Dashboard page
pub const STATUS_PAGE_PATH: &str = "/admin/indexing/status";

/// Prefix of the per-source toggle endpoint
pub const TOGGLE_SOURCE_PATH_PREFIX: &str = "/admin/indexing/status/toggle";

/// Expand/collapse-all endpoint
pub const TOGGLE_ALL_PATH: &str = "/admin/indexing/status/toggle-all";

/// Filter endpoint (applies filters then redirects to the page)
pub const FILTER_PATH: &str = "/admin/indexing/status/filter";

/// Page identifier passed to templates
pub const STATUS_PAGE_ID: &str = "indexing_status";
