//! View model builders
//!
//! Turns the assembled [`StatusTable`] and the request's [`ViewQuery`] into
//! the view models the templates render.
//!
//! ```text
//! Handler → DashboardState → StatusTable
//!    ↓                            ↓
//! Render HTML ← ViewModelBuilder ←┘
//! ```

use chrono::{DateTime, Utc};
use cis_application::{SourceSection, StatusTable, TableRow};
use cis_domain::value_objects::{AccessType, ComparisonOperator, FilterOptions, IndexingStatus};
use cis_infrastructure::utils::FormattingUtils;
use rocket::http::Status;

use super::view_models::*;
use crate::admin::query::ViewQuery;
use crate::constants::{
    FILTER_PATH, STATUS_PAGE_ID, STATUS_PAGE_PATH, TOGGLE_ALL_PATH, TOGGLE_SOURCE_PATH_PREFIX,
};

/// Builds the status page view model for one request
pub struct ViewModelBuilder<'a> {
    query: &'a ViewQuery,
    filters: FilterOptions,
    now: DateTime<Utc>,
}

impl<'a> ViewModelBuilder<'a> {
    /// Builder for `query`, formatting relative times against `now`
    pub fn new(query: &'a ViewQuery, now: DateTime<Utc>) -> Self {
        Self {
            query,
            filters: query.filter_options(),
            now,
        }
    }

    /// Complete status page
    pub fn build_status_page(&self, table: &StatusTable) -> StatusPageViewModel {
        let sections: Vec<SectionViewModel> = table
            .sections
            .iter()
            .map(|section| self.build_section(section))
            .collect();

        let narrowed = self.filters.is_active() || !self.query.search_text().is_empty();
        StatusPageViewModel {
            page: STATUS_PAGE_ID,
            search: self.query.search_text().to_string(),
            show_access_column: table.show_access_column,
            is_empty: sections.is_empty(),
            empty_message: if narrowed {
                "No connectors match the current search and filters."
            } else {
                "No connectors have been set up yet."
            },
            sections,
            toggle_all: ToggleAllViewModel::new(
                table.should_expand_all,
                self.query.href(TOGGLE_ALL_PATH),
            ),
            filters: self.build_filter_form(),
            chips: self.build_chips(),
            clear_filters_url: self.query.without_filters().href(STATUS_PAGE_PATH),
            hidden_filter_fields: self.build_hidden_filter_fields(),
        }
    }

    fn build_section(&self, section: &SourceSection) -> SectionViewModel {
        let summary = &section.summary;
        SectionViewModel {
            source: section.source.as_str(),
            display_name: section.display_name.clone(),
            icon: section.icon,
            expanded: section.expanded,
            toggle_url: self.query.href(&format!(
                "{TOGGLE_SOURCE_PATH_PREFIX}/{}",
                section.source.as_str()
            )),
            count: summary.count,
            active_formatted: SectionViewModel::ratio(summary.active, summary.count),
            active_percentage_formatted: FormattingUtils::format_percentage(
                summary.active_percentage(),
            ),
            public_formatted: SectionViewModel::ratio(summary.public, summary.count),
            total_docs_formatted: FormattingUtils::format_number(summary.total_docs_indexed),
            errors: summary.errors,
            rows: section.rows.iter().map(|row| self.build_row(row)).collect(),
        }
    }

    fn build_row(&self, row: &TableRow) -> RowViewModel {
        match row {
            TableRow::Connector(connector) => RowViewModel::connector(
                connector.name.clone(),
                connector.detail_path.clone(),
                FormattingUtils::format_last_indexed(connector.last_success, self.now),
                connector.status,
                &connector.access,
                connector.docs_indexed,
                connector.editable,
            ),
            TableRow::Federated(federated) => {
                RowViewModel::federated(federated.name.clone(), federated.detail_path.clone())
            }
        }
    }

    /// Filter form with the current selections checked
    pub fn build_filter_form(&self) -> FilterFormViewModel {
        let access = self.filters.access_constraint().unwrap_or_default();
        let statuses = self.filters.status_constraint().unwrap_or_default();
        let docs = self.filters.docs_count_filter;

        FilterFormViewModel {
            action: FILTER_PATH,
            access_options: AccessType::ALL
                .into_iter()
                .map(|option| OptionViewModel {
                    value: option.as_str(),
                    label: access_label(option).to_string(),
                    selected: access.contains(&option),
                })
                .collect(),
            status_options: IndexingStatus::ALL
                .into_iter()
                .map(|option| OptionViewModel {
                    value: option.as_str(),
                    label: capitalize(&option.label()),
                    selected: statuses.contains(&option),
                })
                .collect(),
            docs_operators: [
                ComparisonOperator::GreaterThan,
                ComparisonOperator::LessThan,
                ComparisonOperator::Equal,
            ]
            .into_iter()
            .map(|option| OptionViewModel {
                value: option.mnemonic(),
                label: option.symbol().to_string(),
                selected: docs.operator == Some(option),
            })
            .collect(),
            docs_value: docs.value.map(|v| v.to_string()).unwrap_or_default(),
        }
    }

    /// One chip per active filter
    pub fn build_chips(&self) -> Vec<FilterChipViewModel> {
        let mut chips = Vec::new();

        if let Some(access) = self.filters.access_constraint() {
            chips.push(FilterChipViewModel {
                label: format!("Access: {}", join(access.iter().map(AccessType::as_str))),
            });
        }
        if let Some(statuses) = self.filters.status_constraint() {
            chips.push(FilterChipViewModel {
                label: format!("Status: {}", join(statuses.iter().map(IndexingStatus::label))),
            });
        }
        if let Some(operator) = self.filters.docs_count_filter.operator {
            let value = self
                .filters
                .docs_count_filter
                .value
                .map_or_else(|| "any".to_string(), |v| v.to_string());
            chips.push(FilterChipViewModel {
                label: format!("Docs {} {value}", operator.symbol()),
            });
        }
        chips
    }

    fn build_hidden_filter_fields(&self) -> Vec<HiddenFieldViewModel> {
        self.query
            .without_search()
            .pairs()
            .into_iter()
            .map(|(name, value)| HiddenFieldViewModel { name, value })
            .collect()
    }

    /// Error page
    pub fn build_error(status: Status, title: &str, message: &str) -> ErrorViewModel {
        ErrorViewModel {
            code: status.code,
            title: title.to_string(),
            message: message.to_string(),
            back_url: STATUS_PAGE_PATH,
        }
    }
}

fn access_label(access: AccessType) -> &'static str {
    match access {
        AccessType::Public => "Public",
        AccessType::Private => "Private",
        AccessType::Sync => "Auto Sync",
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn join<S: AsRef<str>>(items: impl Iterator<Item = S>) -> String {
    items
        .map(|item| item.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
