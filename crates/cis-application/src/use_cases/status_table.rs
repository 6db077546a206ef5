//! Status table assembly
//!
//! Combines the computed view, the expand/collapse state and the search
//! query into the rows the presentation layer renders. No formatting happens
//! here: rows carry typed values and the web layer decides how they look.

use chrono::{DateTime, Utc};
use cis_domain::constants::{connector_detail_path, federated_detail_path};
use cis_domain::entities::{ConnectorIndexingStatus, FederatedConnectorDetail};
use cis_domain::ports::SourceCatalog;
use cis_domain::value_objects::{
    AccessType, CcPairStatus, ConnectorSummary, IndexingStatus, SourceType, ToggleState,
};
use serde::Serialize;

use super::status_view::IndexingStatusView;
use crate::domain_services::SearchMatcher;

/// Status badge of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBadge {
    /// Pair is being removed
    Deleting,
    /// Pair was paused by an admin
    Paused,
    /// Pair configuration is invalid
    Invalid,
    /// Recent attempts keep failing
    Error,
    /// Waiting for its first run
    Scheduled,
    /// First run in progress
    InitialIndexing,
    /// Active with an attempt running right now
    Indexing,
    /// Active and idle
    Active,
    /// Federated connectors are always indexed
    Indexed,
}

impl StatusBadge {
    /// Badge for a regular connector
    pub fn for_connector(status: &ConnectorIndexingStatus) -> Self {
        match status.effective_status() {
            CcPairStatus::Deleting => StatusBadge::Deleting,
            CcPairStatus::Paused => StatusBadge::Paused,
            CcPairStatus::Invalid => StatusBadge::Invalid,
            _ if status.in_repeated_error_state => StatusBadge::Error,
            CcPairStatus::Scheduled => StatusBadge::Scheduled,
            CcPairStatus::InitialIndexing => StatusBadge::InitialIndexing,
            CcPairStatus::Active => {
                let running = status
                    .latest_index_attempt
                    .as_ref()
                    .is_some_and(|attempt| attempt.status == IndexingStatus::InProgress);
                if running {
                    StatusBadge::Indexing
                } else {
                    StatusBadge::Active
                }
            }
        }
    }

    /// Badge text
    pub fn label(&self) -> &'static str {
        match self {
            StatusBadge::Deleting => "Deleting",
            StatusBadge::Paused => "Paused",
            StatusBadge::Invalid => "Invalid",
            StatusBadge::Error => "Error",
            StatusBadge::Scheduled => "Scheduled",
            StatusBadge::InitialIndexing => "Initial Indexing",
            StatusBadge::Indexing => "Indexing",
            StatusBadge::Active => "Active",
            StatusBadge::Indexed => "Indexed",
        }
    }
}

/// Permissions badge of a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "source", rename_all = "snake_case")]
pub enum AccessBadge {
    /// Visible to the whole organization
    OrganizationPublic,
    /// Permissions synced from the named source
    InheritedFrom(String),
    /// Explicit grants only
    Private,
    /// Federated connector, access checked live
    FederatedAccess,
}

impl AccessBadge {
    /// Badge for a regular connector
    pub fn for_connector(status: &ConnectorIndexingStatus, catalog: &dyn SourceCatalog) -> Self {
        match status.access_type {
            AccessType::Public => AccessBadge::OrganizationPublic,
            AccessType::Sync => AccessBadge::InheritedFrom(catalog.display_name(status.source)),
            AccessType::Private => AccessBadge::Private,
        }
    }

    /// Badge text
    pub fn label(&self) -> String {
        match self {
            AccessBadge::OrganizationPublic => "Organization Public".to_string(),
            AccessBadge::InheritedFrom(source) => format!("Inherited from {source}"),
            AccessBadge::Private => "Private".to_string(),
            AccessBadge::FederatedAccess => "Federated Access".to_string(),
        }
    }
}

/// Row for a regular connector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectorRow {
    /// CC pair id
    pub cc_pair_id: i64,
    /// Connector name
    pub name: String,
    /// Last successful run
    pub last_success: Option<DateTime<Utc>>,
    /// Status badge
    pub status: StatusBadge,
    /// Permissions badge
    pub access: AccessBadge,
    /// Documents indexed
    pub docs_indexed: u64,
    /// Whether the viewer may manage it
    pub editable: bool,
    /// Navigation target
    pub detail_path: String,
}

/// Row for a federated connector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FederatedRow {
    /// Federated connector id
    pub id: i64,
    /// Connector name
    pub name: String,
    /// Navigation target
    pub detail_path: String,
}

/// One detail row under an expanded source
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableRow {
    /// Regular connector
    Connector(ConnectorRow),
    /// Federated connector
    Federated(FederatedRow),
}

/// A source group as rendered: summary row plus visible detail rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceSection {
    /// Source type
    pub source: SourceType,
    /// Display name
    pub display_name: String,
    /// Icon glyph
    pub icon: &'static str,
    /// Aggregate counts
    pub summary: ConnectorSummary,
    /// Whether detail rows are shown
    pub expanded: bool,
    /// Detail rows; empty while collapsed
    pub rows: Vec<TableRow>,
}

/// The assembled dashboard table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusTable {
    /// Visible sections in display order
    pub sections: Vec<SourceSection>,
    /// Whether the permissions column and public counts render
    pub show_access_column: bool,
    /// Whether the bulk button expands (otherwise it collapses)
    pub should_expand_all: bool,
}

/// Builds a [`StatusTable`] from a computed view
pub struct StatusTableBuilder<'a> {
    catalog: &'a dyn SourceCatalog,
    show_access_column: bool,
    hidden_sources: &'a [SourceType],
}

impl<'a> StatusTableBuilder<'a> {
    /// Create a builder
    pub fn new(catalog: &'a dyn SourceCatalog, show_access_column: bool) -> Self {
        Self {
            catalog,
            show_access_column,
            hidden_sources: &[],
        }
    }

    /// Sources never rendered as a section
    pub fn with_hidden_sources(mut self, hidden_sources: &'a [SourceType]) -> Self {
        self.hidden_sources = hidden_sources;
        self
    }

    /// Assemble the table
    pub fn build(
        &self,
        view: &IndexingStatusView,
        toggles: &ToggleState,
        search: &SearchMatcher,
    ) -> StatusTable {
        let sections = view
            .display_sources()
            .into_iter()
            .filter(|source| !self.hidden_sources.contains(source))
            .filter_map(|source| self.build_section(view, toggles, search, source))
            .collect();

        StatusTable {
            sections,
            show_access_column: self.show_access_column,
            should_expand_all: toggles.expanded_count(&view.sorted_sources)
                < view.sorted_sources.len(),
        }
    }

    fn build_section(
        &self,
        view: &IndexingStatusView,
        toggles: &ToggleState,
        search: &SearchMatcher,
        source: SourceType,
    ) -> Option<SourceSection> {
        let display_name = self.catalog.display_name(source);
        let matched = search.match_source(
            &[source.as_str(), display_name.as_str()],
            view.statuses_for(source),
            view.federated_for(source),
        )?;

        let expanded = toggles.is_expanded(source);
        let rows = if expanded {
            let editable = |id| view.groups.is_editable(id);
            matched
                .statuses
                .into_iter()
                .map(|status| TableRow::Connector(self.connector_row(status, editable(status.cc_pair_id))))
                .chain(matched.federated.into_iter().map(|fc| TableRow::Federated(federated_row(fc))))
                .collect()
        } else {
            Vec::new()
        };

        Some(SourceSection {
            source,
            icon: self.catalog.icon(source),
            display_name,
            summary: view.summary_for(source),
            expanded,
            rows,
        })
    }

    fn connector_row(&self, status: &ConnectorIndexingStatus, editable: bool) -> ConnectorRow {
        ConnectorRow {
            cc_pair_id: status.cc_pair_id,
            name: status.name.clone(),
            last_success: status.last_success,
            status: StatusBadge::for_connector(status),
            access: AccessBadge::for_connector(status, self.catalog),
            docs_indexed: status.docs_indexed,
            editable,
            detail_path: connector_detail_path(status.cc_pair_id),
        }
    }
}

fn federated_row(connector: &FederatedConnectorDetail) -> FederatedRow {
    FederatedRow {
        id: connector.id,
        name: connector.name.clone(),
        detail_path: federated_detail_path(connector.id),
    }
}
