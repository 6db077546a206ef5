//! Admin API Authentication
//!
//! API key authentication for the JSON endpoints under `/api`. The key is
//! read from the `X-Admin-Key` header by default (configurable).
//!
//! # Configuration
//!
//! - Config file: `auth.admin.enabled = true` and `auth.admin.key = "your-key"`
//! - Environment variable: `CIS__AUTH__ADMIN__KEY=your-key`
//!
//! The HTML dashboard, the drill-down routes and `/live` never require a key.

use std::sync::Arc;

use cis_infrastructure::config::AppConfig;
use cis_infrastructure::constants::DEFAULT_ADMIN_KEY_HEADER;
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use rocket::serde::json::Json;
use serde::Serialize;

/// Admin authentication settings held in managed state
#[derive(Debug, Clone)]
pub struct AdminAuthConfig {
    /// Whether authentication is enabled
    pub enabled: bool,
    /// Header carrying the API key
    pub header_name: String,
    /// Expected API key
    pub api_key: Option<String>,
}

impl AdminAuthConfig {
    /// Create a new admin auth config
    pub fn new(enabled: bool, header_name: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            enabled,
            header_name: header_name.into(),
            api_key,
        }
    }

    /// Create from the `auth.admin` section
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self::new(
            config.auth.admin.enabled,
            config.auth.admin.header.clone(),
            config.auth.admin.key.clone(),
        )
    }

    /// Whether `provided` matches the configured key
    ///
    /// Always false when no key is configured.
    pub fn validate_key(&self, provided: &str) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|expected| expected == provided)
    }

    /// Whether authentication is enabled and has a key to compare against
    pub fn is_configured(&self) -> bool {
        self.enabled && self.api_key.is_some()
    }

    /// Classify the key presented by a request
    pub fn check(&self, provided: Option<&str>) -> Result<(), AdminAuthError> {
        if !self.enabled {
            return Ok(());
        }
        if !self.is_configured() {
            return Err(AdminAuthError::NotConfigured);
        }
        match provided {
            Some(key) if self.validate_key(key) => Ok(()),
            Some(_) => Err(AdminAuthError::InvalidKey),
            None => Err(AdminAuthError::MissingKey(self.header_name.clone())),
        }
    }
}

impl Default for AdminAuthConfig {
    fn default() -> Self {
        Self::new(false, DEFAULT_ADMIN_KEY_HEADER, None)
    }
}

/// Authentication error body
#[derive(Debug, Serialize)]
pub struct AuthErrorResponse {
    /// Error type
    pub error: &'static str,
    /// Error message
    pub message: String,
}

impl AuthErrorResponse {
    /// Auth enabled without a key
    pub fn not_configured() -> (Status, Json<Self>) {
        (
            Status::ServiceUnavailable,
            Json(Self {
                error: "auth_not_configured",
                message: "Admin authentication is enabled but no API key is configured. \
                         Set CIS__AUTH__ADMIN__KEY environment variable or auth.admin.key in config."
                    .to_string(),
            }),
        )
    }

    /// Wrong key
    pub fn invalid_key() -> (Status, Json<Self>) {
        (
            Status::Unauthorized,
            Json(Self {
                error: "invalid_api_key",
                message: "Invalid admin API key".to_string(),
            }),
        )
    }

    /// No key at all
    pub fn missing_key(header_name: &str) -> (Status, Json<Self>) {
        (
            Status::Unauthorized,
            Json(Self {
                error: "missing_api_key",
                message: format!("Admin API key required. Provide it in the '{header_name}' header."),
            }),
        )
    }

    /// Body for a guard failure
    pub fn from_error(error: &AdminAuthError) -> (Status, Json<Self>) {
        match error {
            AdminAuthError::NotConfigured => Self::not_configured(),
            AdminAuthError::InvalidKey => Self::invalid_key(),
            AdminAuthError::MissingKey(header) => Self::missing_key(header),
        }
    }
}

/// Request guard for admin authentication
///
/// ```rust,ignore
/// #[get("/api/protected")]
/// fn protected(_auth: AdminAuth) -> &'static str {
///     "Protected content"
/// }
/// ```
pub struct AdminAuth;

/// Admin authentication failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAuthError {
    /// Authentication enabled without a key
    NotConfigured,
    /// Wrong API key
    InvalidKey,
    /// No API key in the named header
    MissingKey(String),
}

impl AdminAuthError {
    /// HTTP status for the failure
    pub fn status(&self) -> Status {
        match self {
            AdminAuthError::NotConfigured => Status::ServiceUnavailable,
            AdminAuthError::InvalidKey | AdminAuthError::MissingKey(_) => Status::Unauthorized,
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AdminAuth {
    type Error = AdminAuthError;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        // No auth config means auth is disabled
        let Some(auth_config) = request.rocket().state::<Arc<AdminAuthConfig>>() else {
            return Outcome::Success(AdminAuth);
        };

        let provided = request.headers().get_one(&auth_config.header_name);
        match auth_config.check(provided) {
            Ok(()) => Outcome::Success(AdminAuth),
            Err(error) => {
                tracing::debug!(error = ?error, path = %request.uri().path(), "Admin auth rejected");
                let status = error.status();
                // Read back by the JSON catchers
                request.local_cache(|| Some(error.clone()));
                Outcome::Error((status, error))
            }
        }
    }
}

/// Guard failure recorded for the current request, if any
pub fn cached_auth_error(request: &Request<'_>) -> Option<AdminAuthError> {
    request.local_cache(|| None::<AdminAuthError>).clone()
}
