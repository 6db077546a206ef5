//! View models for web templates
//!
//! Flat, pre-formatted structures for Tera:
//! - Display strings computed up front (numbers, relative times, badges)
//! - CSS classes chosen here, not in templates
//! - Links already carrying the current query string

use cis_application::{AccessBadge, StatusBadge};
use cis_infrastructure::utils::FormattingUtils;
use serde::Serialize;

/// Indexing status page
#[derive(Debug, Clone, Serialize)]
pub struct StatusPageViewModel {
    pub page: &'static str,
    pub search: String,
    pub show_access_column: bool,
    pub sections: Vec<SectionViewModel>,
    pub toggle_all: ToggleAllViewModel,
    pub filters: FilterFormViewModel,
    pub chips: Vec<FilterChipViewModel>,
    pub clear_filters_url: String,
    /// Current filters, re-submitted by the search form
    pub hidden_filter_fields: Vec<HiddenFieldViewModel>,
    pub is_empty: bool,
    pub empty_message: &'static str,
}

/// One source group
#[derive(Debug, Clone, Serialize)]
pub struct SectionViewModel {
    pub source: &'static str,
    pub display_name: String,
    pub icon: &'static str,
    pub expanded: bool,
    pub toggle_url: String,
    pub count: usize,
    pub active_formatted: String,
    pub active_percentage_formatted: String,
    pub public_formatted: String,
    pub total_docs_formatted: String,
    pub errors: usize,
    pub rows: Vec<RowViewModel>,
}

impl SectionViewModel {
    /// `active/count` and `public/count` ratios
    pub fn ratio(part: usize, count: usize) -> String {
        format!("{part}/{count}")
    }
}

/// One connector row
#[derive(Debug, Clone, Serialize)]
pub struct RowViewModel {
    /// `connector` or `federated`
    pub kind: &'static str,
    pub name: String,
    pub detail_path: String,
    pub last_indexed: String,
    pub status_label: String,
    pub status_class: &'static str,
    pub access_label: String,
    pub access_class: &'static str,
    pub docs_formatted: String,
    pub editable: bool,
    /// Settings link title, absent for read-only connectors
    pub manage_label: Option<&'static str>,
}

impl RowViewModel {
    /// Row for a regular connector
    pub fn connector(
        name: String,
        detail_path: String,
        last_indexed: String,
        status: StatusBadge,
        access: &AccessBadge,
        docs_indexed: u64,
        editable: bool,
    ) -> Self {
        Self {
            kind: "connector",
            name,
            detail_path,
            last_indexed,
            status_label: status.label().to_string(),
            status_class: status_css_class(status, editable),
            access_label: access.label(),
            access_class: access_css_class(access, editable),
            docs_formatted: FormattingUtils::format_number(docs_indexed),
            editable,
            manage_label: editable.then_some("Manage Connector"),
        }
    }

    /// Row for a federated connector
    pub fn federated(name: String, detail_path: String) -> Self {
        Self {
            kind: "federated",
            name,
            detail_path,
            last_indexed: "N/A".to_string(),
            status_label: StatusBadge::Indexed.label().to_string(),
            status_class: status_css_class(StatusBadge::Indexed, true),
            access_label: AccessBadge::FederatedAccess.label(),
            access_class: access_css_class(&AccessBadge::FederatedAccess, true),
            docs_formatted: "N/A".to_string(),
            editable: true,
            manage_label: Some("Manage Federated Connector"),
        }
    }
}

/// Expand all / Collapse all button
#[derive(Debug, Clone, Serialize)]
pub struct ToggleAllViewModel {
    pub label: &'static str,
    pub url: String,
}

impl ToggleAllViewModel {
    pub fn new(should_expand_all: bool, url: String) -> Self {
        Self {
            label: if should_expand_all {
                "Expand All"
            } else {
                "Collapse All"
            },
            url,
        }
    }
}

/// Filter form state
#[derive(Debug, Clone, Serialize)]
pub struct FilterFormViewModel {
    pub action: &'static str,
    pub access_options: Vec<OptionViewModel>,
    pub status_options: Vec<OptionViewModel>,
    pub docs_operators: Vec<OptionViewModel>,
    pub docs_value: String,
}

/// Checkbox or select option
#[derive(Debug, Clone, Serialize)]
pub struct OptionViewModel {
    pub value: &'static str,
    pub label: String,
    pub selected: bool,
}

/// Active filter chip
#[derive(Debug, Clone, Serialize)]
pub struct FilterChipViewModel {
    pub label: String,
}

/// Hidden form input
#[derive(Debug, Clone, Serialize)]
pub struct HiddenFieldViewModel {
    pub name: &'static str,
    pub value: String,
}

/// Error page
#[derive(Debug, Clone, Serialize)]
pub struct ErrorViewModel {
    pub code: u16,
    pub title: String,
    pub message: String,
    pub back_url: &'static str,
}

fn status_css_class(status: StatusBadge, editable: bool) -> &'static str {
    if !editable {
        return "badge muted";
    }
    match status {
        StatusBadge::Active | StatusBadge::Indexed => "badge success",
        StatusBadge::Indexing | StatusBadge::InitialIndexing | StatusBadge::Scheduled => {
            "badge info"
        }
        StatusBadge::Paused | StatusBadge::Deleting => "badge warning",
        StatusBadge::Error | StatusBadge::Invalid => "badge danger",
    }
}

fn access_css_class(access: &AccessBadge, editable: bool) -> &'static str {
    if !editable {
        return "badge muted";
    }
    match access {
        AccessBadge::OrganizationPublic => "badge success",
        AccessBadge::InheritedFrom(_) | AccessBadge::FederatedAccess => "badge info",
        AccessBadge::Private => "badge neutral",
    }
}
