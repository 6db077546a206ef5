//! Feature flag adapter

use cis_domain::ports::FeatureFlagProvider;

use crate::config::FeaturesConfig;

/// Feature flags read from configuration at startup
#[derive(Debug, Clone, Default)]
pub struct ConfigFeatureFlags {
    config: FeaturesConfig,
}

impl ConfigFeatureFlags {
    /// Create flags from the `features` section
    pub fn new(config: FeaturesConfig) -> Self {
        Self { config }
    }
}

impl FeatureFlagProvider for ConfigFeatureFlags {
    fn paid_enterprise_features_enabled(&self) -> bool {
        self.config.paid_enterprise_features_enabled
    }
}
