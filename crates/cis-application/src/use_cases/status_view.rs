//! Indexing status view computation
//!
//! One pure function turns the snapshot lists and the current filters into
//! every derived structure the dashboard needs. Callers re-invoke it whenever
//! inputs or filters change; nothing is memoized.

use std::collections::BTreeMap;

use cis_domain::entities::{ConnectorIndexingStatus, FederatedConnectorDetail, IndexingSnapshot};
use cis_domain::ports::SourceCatalog;
use cis_domain::value_objects::{ConnectorSummary, FilterOptions, SourceType};

use crate::domain_services::summary::federated_only_sources;
use crate::domain_services::{
    FederatedBySource, FilterEvaluator, FilteredGroups, SourceGroups, federated_by_source,
    summarize,
};

/// Derived state of the dashboard for one set of inputs
#[derive(Debug, Clone)]
pub struct IndexingStatusView {
    /// Unfiltered groups of regular connectors
    pub groups: SourceGroups,
    /// Grouped source types, sorted
    pub sorted_sources: Vec<SourceType>,
    /// Summary per grouped or federated-only source
    pub summaries: BTreeMap<SourceType, ConnectorSummary>,
    /// Groups narrowed by the filters, empty groups dropped
    pub filtered_groups: FilteredGroups,
    /// Federated connectors per regular source
    pub federated: FederatedBySource,
    /// Sorted sources followed by federated-only sources
    pub all_sources_with_federated: Vec<SourceType>,
    /// Whether any filter was active
    pub filters_active: bool,
}

/// Compute the complete view
pub fn compute_view(
    all: &[ConnectorIndexingStatus],
    editable: &[ConnectorIndexingStatus],
    federated: &[FederatedConnectorDetail],
    filters: &FilterOptions,
    catalog: &dyn SourceCatalog,
) -> IndexingStatusView {
    let groups = SourceGroups::group(all, editable);
    let sorted_sources = groups.sorted_sources();
    let federated_map = federated_by_source(federated, catalog);
    let summaries = summarize(&groups, &federated_map);
    let filtered_groups = FilterEvaluator::new(filters).apply(&groups);

    let mut all_sources_with_federated = sorted_sources.clone();
    all_sources_with_federated.extend(federated_only_sources(&groups, federated, catalog));

    IndexingStatusView {
        groups,
        sorted_sources,
        summaries,
        filtered_groups,
        federated: federated_map,
        all_sources_with_federated,
        filters_active: filters.is_active(),
    }
}

/// Compute the view for a whole snapshot
pub fn compute_snapshot_view(
    snapshot: &IndexingSnapshot,
    filters: &FilterOptions,
    catalog: &dyn SourceCatalog,
) -> IndexingStatusView {
    compute_view(
        &snapshot.indexing_statuses,
        &snapshot.editable_indexing_statuses,
        &snapshot.federated_connectors,
        filters,
        catalog,
    )
}

impl IndexingStatusView {
    /// Sources to render, in order
    ///
    /// With an active filter only sources that kept a record; otherwise
    /// every grouped source followed by federated-only sources.
    pub fn display_sources(&self) -> Vec<SourceType> {
        if self.filters_active {
            self.filtered_groups.keys().copied().collect()
        } else {
            self.all_sources_with_federated.clone()
        }
    }

    /// Sources to force open after the filters were applied
    ///
    /// Empty when no filter is active.
    pub fn sources_to_expand(&self) -> Vec<SourceType> {
        if self.filters_active {
            self.filtered_groups.keys().copied().collect()
        } else {
            Vec::new()
        }
    }

    /// Regular records shown for a source: filtered when present, else all
    pub fn statuses_for(&self, source: SourceType) -> &[ConnectorIndexingStatus] {
        self.filtered_groups
            .get(&source)
            .map(Vec::as_slice)
            .or_else(|| self.groups.get(source))
            .unwrap_or_default()
    }

    /// Federated connectors grouped under a source
    pub fn federated_for(&self, source: SourceType) -> &[FederatedConnectorDetail] {
        self.federated
            .get(&source)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Summary for a source, zero when unknown
    pub fn summary_for(&self, source: SourceType) -> ConnectorSummary {
        self.summaries
            .get(&source)
            .copied()
            .unwrap_or_else(|| ConnectorSummary::federated_only(self.federated_for(source).len()))
    }
}
