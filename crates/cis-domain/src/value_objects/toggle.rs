//! Expand/collapse state per source group

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::source::SourceType;
use crate::error::Result;

/// Mapping from source type to "expanded"
///
/// Missing entries are collapsed. Serialized as a flat JSON object
/// (`{"slack":true,"web":false}`) so it fits in a single cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToggleState(BTreeMap<SourceType, bool>);

impl ToggleState {
    /// Empty state, everything collapsed
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a source is expanded
    pub fn is_expanded(&self, source: SourceType) -> bool {
        self.0.get(&source).copied().unwrap_or(false)
    }

    /// Force a source to a state
    pub fn set(&mut self, source: SourceType, expanded: bool) {
        self.0.insert(source, expanded);
    }

    /// Number of expanded entries among `sources`
    pub fn expanded_count(&self, sources: &[SourceType]) -> usize {
        sources
            .iter()
            .filter(|source| self.is_expanded(**source))
            .count()
    }

    /// Iterate over every recorded entry
    pub fn iter(&self) -> impl Iterator<Item = (SourceType, bool)> + '_ {
        self.0.iter().map(|(source, expanded)| (*source, *expanded))
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize for persistence
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a persisted blob, tolerating damage
    ///
    /// Anything that is not a JSON object yields an empty state. Entries with
    /// an unknown source or a non-boolean value are dropped.
    pub fn from_json_lossy(raw: &str) -> Self {
        let Ok(serde_json::Value::Object(entries)) = serde_json::from_str(raw) else {
            return Self::default();
        };

        let state = entries
            .into_iter()
            .filter_map(|(key, value)| {
                let source = key.parse::<SourceType>().ok()?;
                Some((source, value.as_bool()?))
            })
            .collect();

        Self(state)
    }
}

impl FromIterator<(SourceType, bool)> for ToggleState {
    fn from_iter<I: IntoIterator<Item = (SourceType, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
