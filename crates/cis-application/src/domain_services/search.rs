//! Search matching
//!
//! Case-insensitive substring search over source labels and connector
//! names, applied after filtering when the table is assembled.

use cis_domain::entities::{ConnectorIndexingStatus, FederatedConnectorDetail};

/// Members of one source group that survive a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMatch<'a> {
    /// The source label itself matched, so every member is shown
    pub broad: bool,
    /// Regular connectors to show
    pub statuses: Vec<&'a ConnectorIndexingStatus>,
    /// Federated connectors to show
    pub federated: Vec<&'a FederatedConnectorDetail>,
}

/// Lower-cased search query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchMatcher {
    needle: String,
}

impl SearchMatcher {
    /// Create a matcher for a raw query
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// The lower-cased query
    pub fn query(&self) -> &str {
        &self.needle
    }

    /// Whether the query is empty (matches everything)
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Case-insensitive substring test
    pub fn matches_text(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.needle)
    }

    /// Match one source group
    ///
    /// `labels` are the names the source is known by (wire name, display
    /// name). Returns `None` when neither a label nor any member name
    /// matches.
    pub fn match_source<'a>(
        &self,
        labels: &[&str],
        statuses: &'a [ConnectorIndexingStatus],
        federated: &'a [FederatedConnectorDetail],
    ) -> Option<SourceMatch<'a>> {
        if labels.iter().any(|label| self.matches_text(label)) {
            return Some(SourceMatch {
                broad: true,
                statuses: statuses.iter().collect(),
                federated: federated.iter().collect(),
            });
        }

        let matching_statuses: Vec<&ConnectorIndexingStatus> = statuses
            .iter()
            .filter(|status| self.matches_text(&status.name))
            .collect();
        let matching_federated: Vec<&FederatedConnectorDetail> = federated
            .iter()
            .filter(|connector| self.matches_text(&connector.name))
            .collect();

        if matching_statuses.is_empty() && matching_federated.is_empty() {
            return None;
        }

        Some(SourceMatch {
            broad: false,
            statuses: matching_statuses,
            federated: matching_federated,
        })
    }
}
