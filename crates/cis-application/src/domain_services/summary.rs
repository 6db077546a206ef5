//! Per-source summaries
//!
//! Aggregate counts for every grouped source and every source reached only
//! through federated connectors.

use std::collections::BTreeMap;

use cis_domain::entities::{ConnectorIndexingStatus, FederatedConnectorDetail};
use cis_domain::ports::SourceCatalog;
use cis_domain::value_objects::{AccessType, ConnectorSummary, SourceType};
use itertools::Itertools;

use super::grouping::SourceGroups;

/// Federated connectors keyed by the regular source they map to
pub type FederatedBySource = BTreeMap<SourceType, Vec<FederatedConnectorDetail>>;

/// Bucket federated connectors under their regular source type
pub fn federated_by_source(
    federated: &[FederatedConnectorDetail],
    catalog: &dyn SourceCatalog,
) -> FederatedBySource {
    federated
        .iter()
        .map(|connector| (catalog.federated_to_regular(connector.source), connector.clone()))
        .into_group_map()
        .into_iter()
        .collect()
}

/// Regular sources reached only by federated connectors, in first-seen order
pub fn federated_only_sources(
    groups: &SourceGroups,
    federated: &[FederatedConnectorDetail],
    catalog: &dyn SourceCatalog,
) -> Vec<SourceType> {
    federated
        .iter()
        .map(|connector| catalog.federated_to_regular(connector.source))
        .unique()
        .filter(|source| !groups.contains(*source))
        .collect()
}

/// Summarize one group of regular connectors plus its federated count
pub fn summarize_group(
    statuses: &[ConnectorIndexingStatus],
    federated_count: usize,
) -> ConnectorSummary {
    ConnectorSummary {
        count: statuses.len() + federated_count,
        active: statuses.iter().filter(|s| s.is_active()).count() + federated_count,
        public: statuses
            .iter()
            .filter(|s| s.access_type == AccessType::Public)
            .count(),
        total_docs_indexed: statuses.iter().map(|s| s.docs_indexed).sum(),
        errors: statuses.iter().filter(|s| s.last_run_failed()).count(),
    }
}

/// Summaries for every grouped source and every federated-only source
pub fn summarize(
    groups: &SourceGroups,
    federated: &FederatedBySource,
) -> BTreeMap<SourceType, ConnectorSummary> {
    let federated_count = |source: SourceType| federated.get(&source).map_or(0, Vec::len);

    let mut summaries: BTreeMap<SourceType, ConnectorSummary> = groups
        .iter()
        .map(|(source, statuses)| (source, summarize_group(statuses, federated_count(source))))
        .collect();

    for (source, connectors) in federated {
        summaries
            .entry(*source)
            .or_insert_with(|| ConnectorSummary::federated_only(connectors.len()));
    }

    summaries
}
