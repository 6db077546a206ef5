//! Source grouping
//!
//! Partitions the flat connector lists into one ordered group per source
//! type. Editable connectors lead each group; a read-only copy of a
//! connector that is also editable is dropped.

use std::collections::{BTreeMap, HashSet};

use cis_domain::entities::ConnectorIndexingStatus;
use cis_domain::value_objects::SourceType;
use tracing::debug;

/// Connector records grouped by source type
///
/// Iteration order is the lexicographic order of the source wire name.
#[derive(Debug, Clone, Default)]
pub struct SourceGroups {
    groups: BTreeMap<SourceType, Vec<ConnectorIndexingStatus>>,
    editable_ids: HashSet<i64>,
}

impl SourceGroups {
    /// Group `all` and `editable` connector lists
    ///
    /// Editable records are prepended as they arrive, so within a group the
    /// last editable record received comes first. Read-only records follow in
    /// arrival order unless their id appears anywhere in the editable list.
    pub fn group(all: &[ConnectorIndexingStatus], editable: &[ConnectorIndexingStatus]) -> Self {
        let editable_ids: HashSet<i64> = editable.iter().map(|s| s.cc_pair_id).collect();
        let mut groups: BTreeMap<SourceType, Vec<ConnectorIndexingStatus>> = BTreeMap::new();

        for status in editable {
            let group = groups.entry(status.source).or_default();
            if group.iter().any(|s| s.cc_pair_id == status.cc_pair_id) {
                debug!(cc_pair_id = status.cc_pair_id, "Skipping duplicate editable connector");
                continue;
            }
            group.insert(0, status.clone());
        }

        for status in all {
            let group = groups.entry(status.source).or_default();
            if !editable_ids.contains(&status.cc_pair_id) {
                group.push(status.clone());
            }
        }

        Self {
            groups,
            editable_ids,
        }
    }

    /// Distinct source types, sorted
    pub fn sorted_sources(&self) -> Vec<SourceType> {
        self.groups.keys().copied().collect()
    }

    /// Records of one source, if the source has a group
    pub fn get(&self, source: SourceType) -> Option<&[ConnectorIndexingStatus]> {
        self.groups.get(&source).map(Vec::as_slice)
    }

    /// Whether a source has a group (possibly empty)
    pub fn contains(&self, source: SourceType) -> bool {
        self.groups.contains_key(&source)
    }

    /// Iterate over groups in sorted order
    pub fn iter(&self) -> impl Iterator<Item = (SourceType, &[ConnectorIndexingStatus])> {
        self.groups
            .iter()
            .map(|(source, statuses)| (*source, statuses.as_slice()))
    }

    /// Whether the viewer may manage a connector
    pub fn is_editable(&self, cc_pair_id: i64) -> bool {
        self.editable_ids.contains(&cc_pair_id)
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
