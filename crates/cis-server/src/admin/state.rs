//! Shared dashboard state
//!
//! Everything a request needs, managed by Rocket. Only the collaborators
//! live here; the view itself is recomputed per request.

use std::sync::Arc;

use cis_application::{IndexingStatusView, StatusTableBuilder, compute_snapshot_view};
use cis_domain::constants::{DEFAULT_HIDDEN_SOURCES, TOGGLED_CONNECTORS_COOKIE_NAME};
use cis_domain::entities::IndexingSnapshot;
use cis_domain::error::Result;
use cis_domain::ports::{FeatureFlagProvider, IndexingSnapshotSource, SourceCatalog};
use cis_domain::value_objects::{FilterOptions, SourceType};
use cis_infrastructure::adapters::{ConfigFeatureFlags, JsonFileSnapshotSource, StaticSourceCatalog};
use cis_infrastructure::config::AppConfig;
use rocket::http::CookieJar;

use super::cookie_store::CookieToggleStore;
use super::web::WebInterface;

/// State shared by every route
pub struct DashboardState {
    /// Data-fetch layer
    pub snapshots: Arc<dyn IndexingSnapshotSource>,
    /// Source display metadata
    pub catalog: Arc<dyn SourceCatalog>,
    /// Feature flags
    pub features: Arc<dyn FeatureFlagProvider>,
    /// Sources never rendered
    pub hidden_sources: Vec<SourceType>,
    /// Cookie holding the expand/collapse map
    pub cookie_name: String,
    /// Compiled templates
    pub web: WebInterface,
}

impl DashboardState {
    /// Create state with the default cookie name and hidden sources
    pub fn new(
        snapshots: Arc<dyn IndexingSnapshotSource>,
        catalog: Arc<dyn SourceCatalog>,
        features: Arc<dyn FeatureFlagProvider>,
    ) -> Result<Self> {
        Ok(Self {
            snapshots,
            catalog,
            features,
            hidden_sources: DEFAULT_HIDDEN_SOURCES.to_vec(),
            cookie_name: TOGGLED_CONNECTORS_COOKIE_NAME.to_string(),
            web: WebInterface::new()?,
        })
    }

    /// Create state from configuration
    ///
    /// The snapshot file is read lazily, a missing file only fails requests.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let state = Self::new(
            Arc::new(JsonFileSnapshotSource::new(&config.dashboard.snapshot_path)),
            Arc::new(StaticSourceCatalog::new()),
            Arc::new(ConfigFeatureFlags::new(config.features.clone())),
        )?;
        Ok(state
            .with_hidden_sources(config.dashboard.hidden_sources.clone())
            .with_cookie_name(config.dashboard.cookie_name.clone()))
    }

    /// Replace the hidden sources
    pub fn with_hidden_sources(mut self, hidden_sources: Vec<SourceType>) -> Self {
        self.hidden_sources = hidden_sources;
        self
    }

    /// Replace the cookie name
    pub fn with_cookie_name(mut self, cookie_name: impl Into<String>) -> Self {
        self.cookie_name = cookie_name.into();
        self
    }

    /// Current snapshot
    pub fn load_snapshot(&self) -> Result<IndexingSnapshot> {
        self.snapshots.load_snapshot()
    }

    /// Derived view of `snapshot` under `filters`
    pub fn compute_view(
        &self,
        snapshot: &IndexingSnapshot,
        filters: &FilterOptions,
    ) -> IndexingStatusView {
        compute_snapshot_view(snapshot, filters, self.catalog.as_ref())
    }

    /// Table builder honoring the feature flags and hidden sources
    pub fn table_builder(&self) -> StatusTableBuilder<'_> {
        StatusTableBuilder::new(
            self.catalog.as_ref(),
            self.features.paid_enterprise_features_enabled(),
        )
        .with_hidden_sources(&self.hidden_sources)
    }

    /// Toggle store for the request's cookies
    pub fn toggle_store<'a, 'r>(&'a self, jar: &'a CookieJar<'r>) -> CookieToggleStore<'a, 'r> {
        CookieToggleStore::new(jar, &self.cookie_name)
    }
}
