//! Feature toggle configuration

use serde::{Deserialize, Serialize};

/// Feature toggles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeaturesConfig {
    /// Render the permissions column and public connector counts
    #[serde(default)]
    pub paid_enterprise_features_enabled: bool,
}
