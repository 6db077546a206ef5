//! Filter evaluation
//!
//! Narrows regular connector groups with the user's [`FilterOptions`].
//! Federated connectors are never passed through the evaluator.

use std::collections::BTreeMap;

use cis_domain::entities::ConnectorIndexingStatus;
use cis_domain::value_objects::{FilterOptions, SourceType};

use super::grouping::SourceGroups;

/// Groups that kept at least one record after filtering
pub type FilteredGroups = BTreeMap<SourceType, Vec<ConnectorIndexingStatus>>;

/// Predicate built from a set of filter options
#[derive(Debug, Clone, Copy)]
pub struct FilterEvaluator<'a> {
    filters: &'a FilterOptions,
}

impl<'a> FilterEvaluator<'a> {
    /// Create an evaluator for the given filters
    pub fn new(filters: &'a FilterOptions) -> Self {
        Self { filters }
    }

    /// Whether a record passes every constraint
    pub fn matches(&self, status: &ConnectorIndexingStatus) -> bool {
        if let Some(allowed) = self.filters.access_constraint() {
            if !allowed.contains(&status.access_type) {
                return false;
            }
        }

        if let Some(allowed) = self.filters.status_constraint() {
            match status.last_status {
                Some(last) if allowed.contains(&last) => {}
                _ => return false,
            }
        }

        let docs = self.filters.docs_count_filter;
        match (docs.operator, docs.value) {
            (Some(operator), Some(value)) => operator.compare(status.docs_indexed, value),
            // an operator alone is not yet a constraint
            _ => true,
        }
    }

    /// Filter every group, dropping groups left empty
    pub fn apply(&self, groups: &SourceGroups) -> FilteredGroups {
        groups
            .iter()
            .filter_map(|(source, statuses)| {
                let kept: Vec<ConnectorIndexingStatus> = statuses
                    .iter()
                    .filter(|status| self.matches(status))
                    .cloned()
                    .collect();
                (!kept.is_empty()).then_some((source, kept))
            })
            .collect()
    }
}
