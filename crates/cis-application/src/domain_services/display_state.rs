//! Display state controller
//!
//! Tracks which source groups are expanded. The state is read once from a
//! [`ToggleStateStore`] and written back in full after every transition.

use cis_domain::error::Result;
use cis_domain::ports::ToggleStateStore;
use cis_domain::value_objects::{SourceType, ToggleState};
use tracing::{debug, warn};

/// Expand/collapse state machine backed by a persistent store
pub struct DisplayStateController<S: ToggleStateStore> {
    store: S,
    state: ToggleState,
}

impl<S: ToggleStateStore> DisplayStateController<S> {
    /// Initialize from the store
    ///
    /// A missing, unreadable or corrupt value starts from an empty map.
    pub fn load(store: S) -> Self {
        let state = match store.load() {
            Ok(Some(raw)) => ToggleState::from_json_lossy(&raw),
            Ok(None) => ToggleState::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read toggle state, starting collapsed");
                ToggleState::new()
            }
        };
        Self { store, state }
    }

    /// Current state
    pub fn state(&self) -> &ToggleState {
        &self.state
    }

    /// Whether a source is expanded
    pub fn is_expanded(&self, source: SourceType) -> bool {
        self.state.is_expanded(source)
    }

    /// Flip a source, or force it to `forced` when given
    ///
    /// Returns the new state of the source.
    pub fn toggle(&mut self, source: SourceType, forced: Option<bool>) -> Result<bool> {
        let expanded = forced.unwrap_or_else(|| !self.state.is_expanded(source));
        self.state.set(source, expanded);
        debug!(source = %source, expanded, "Toggled source");
        self.persist()?;
        Ok(expanded)
    }

    /// Whether "expand all" (rather than "collapse all") is the next action
    ///
    /// True while fewer than all `sorted_sources` are expanded.
    pub fn should_expand_all(&self, sorted_sources: &[SourceType]) -> bool {
        self.state.expanded_count(sorted_sources) < sorted_sources.len()
    }

    /// Expand or collapse every source at once
    ///
    /// The whole map is replaced by `sorted_sources` set to a single target.
    /// Returns that target.
    pub fn toggle_all(&mut self, sorted_sources: &[SourceType]) -> Result<bool> {
        let target = self.should_expand_all(sorted_sources);
        self.state = sorted_sources
            .iter()
            .map(|source| (*source, target))
            .collect();
        debug!(expanded = target, sources = sorted_sources.len(), "Toggled all sources");
        self.persist()?;
        Ok(target)
    }

    /// Expand every listed source, leaving the others untouched
    pub fn expand_sources(&mut self, sources: &[SourceType]) -> Result<()> {
        for source in sources {
            self.state.set(*source, true);
        }
        debug!(sources = sources.len(), "Expanded filtered sources");
        self.persist()
    }

    /// Consume the controller, keeping the state
    pub fn into_state(self) -> ToggleState {
        self.state
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.state.to_json()?)
    }
}
