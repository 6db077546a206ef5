//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{AuthConfig, DashboardConfig, FeaturesConfig, LoggingConfig, ServerConfig};

/// Root configuration of the dashboard server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Authentication settings
    #[serde(default)]
    pub auth: AuthConfig,

    /// Dashboard data and display settings
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Feature toggles
    #[serde(default)]
    pub features: FeaturesConfig,
}
