//! Dashboard query parameters
//!
//! Filters and the search text travel in the query string so that every
//! page, toggle and redirect keeps the current view. Unknown values are
//! dropped rather than rejected.

use std::fmt::Display;
use std::str::FromStr;

use cis_application::SearchMatcher;
use cis_domain::value_objects::{
    AccessType, ComparisonOperator, DocsCountFilter, FilterOptions, IndexingStatus,
};
use rocket::FromForm;
use rocket::http::RawStr;
use tracing::debug;

/// Raw view parameters as submitted by the filter and search forms
#[derive(Debug, Clone, Default, PartialEq, Eq, FromForm)]
pub struct ViewQuery {
    /// Search text
    pub search: Option<String>,
    /// Allowed access types (repeated)
    #[field(default = Vec::new())]
    pub access: Vec<String>,
    /// Allowed last-run statuses (repeated)
    #[field(default = Vec::new())]
    pub status: Vec<String>,
    /// Docs count operator (`gt`, `lt`, `eq` or the symbol)
    pub docs_op: Option<String>,
    /// Docs count value
    pub docs_value: Option<String>,
}

impl ViewQuery {
    /// Parsed filters
    pub fn filter_options(&self) -> FilterOptions {
        let access: Vec<AccessType> = parse_values(&self.access, "access");
        let statuses: Vec<IndexingStatus> = parse_values(&self.status, "status");
        let operator = non_empty(self.docs_op.as_deref())
            .and_then(|raw| parse_value::<ComparisonOperator>(raw, "docs_op"));
        let value = non_empty(self.docs_value.as_deref())
            .and_then(|raw| parse_value::<u64>(raw, "docs_value"));

        FilterOptions {
            access_type: (!access.is_empty()).then_some(access),
            last_status: (!statuses.is_empty()).then_some(statuses),
            docs_count_filter: DocsCountFilter { operator, value },
        }
    }

    /// Trimmed search text, empty when absent
    pub fn search_text(&self) -> &str {
        non_empty(self.search.as_deref()).unwrap_or_default()
    }

    /// Matcher for the search text
    pub fn search_matcher(&self) -> SearchMatcher {
        SearchMatcher::new(self.search_text())
    }

    /// Same search, no filters
    pub fn without_filters(&self) -> Self {
        Self {
            search: self.search.clone(),
            ..Self::default()
        }
    }

    /// Same filters, no search
    pub fn without_search(&self) -> Self {
        Self {
            search: None,
            ..self.clone()
        }
    }

    /// Normalized `(name, value)` pairs describing this view
    ///
    /// Only values that parsed are kept, operators use their mnemonic.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let filters = self.filter_options();
        let mut pairs = Vec::new();

        let search = self.search_text();
        if !search.is_empty() {
            pairs.push(("search", search.to_string()));
        }
        for access in filters.access_constraint().unwrap_or_default() {
            pairs.push(("access", access.as_str().to_string()));
        }
        for status in filters.status_constraint().unwrap_or_default() {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(operator) = filters.docs_count_filter.operator {
            pairs.push(("docs_op", operator.mnemonic().to_string()));
        }
        if let Some(value) = filters.docs_count_filter.value {
            pairs.push(("docs_value", value.to_string()));
        }
        pairs
    }

    /// Percent-encoded query string, without the leading `?`
    pub fn to_query_string(&self) -> String {
        self.pairs()
            .iter()
            .map(|(name, value)| format!("{name}={}", RawStr::new(value).percent_encode()))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `path` carrying this view's query string
    pub fn href(&self, path: &str) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        }
    }
}

/// Body of the per-source toggle form
#[derive(Debug, Clone, Default, FromForm)]
pub struct ToggleForm {
    /// Forced target state; absent flips the current one
    pub expanded: Option<bool>,
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_value<T>(raw: &str, field: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(field, value = raw, error = %e, "Ignoring query value");
            None
        }
    }
}

fn parse_values<T>(raw: &[String], field: &str) -> Vec<T>
where
    T: FromStr + PartialEq,
    T::Err: Display,
{
    let mut values = Vec::new();
    for value in raw.iter().filter_map(|r| parse_value::<T>(r.trim(), field)) {
        if !values.contains(&value) {
            values.push(value);
        }
    }
    values
}
