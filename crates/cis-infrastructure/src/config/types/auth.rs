//! Authentication configuration types

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ADMIN_KEY_HEADER;

/// Admin API key configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminApiKeyConfig {
    /// Admin API key authentication enabled
    pub enabled: bool,

    /// Header name for admin API key
    #[serde(default = "default_admin_key_header")]
    pub header: String,

    /// The actual admin API key
    ///
    /// Configure via `CIS__AUTH__ADMIN__KEY` environment variable
    /// or `auth.admin.key` in config file.
    #[serde(default)]
    pub key: Option<String>,
}

fn default_admin_key_header() -> String {
    DEFAULT_ADMIN_KEY_HEADER.to_string()
}

impl Default for AdminApiKeyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            header: default_admin_key_header(),
            key: None,
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Admin API key protecting the JSON endpoints
    #[serde(default)]
    pub admin: AdminApiKeyConfig,
}
