//! Server Initialization
//!
//! Loads configuration, installs logging, assembles the dashboard state and
//! launches Rocket.
//!
//! # Configuration
//!
//! Sources, later overriding earlier:
//! - Compiled-in defaults
//! - `cis.toml` (explicit `--config`, else the default locations)
//! - `CIS__`-prefixed environment variables (e.g. `CIS__SERVER__PORT=9000`)
//! - `--snapshot` and `--port` command line flags

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use cis_infrastructure::config::loader::validate_app_config;
use cis_infrastructure::config::{AppConfig, ConfigLoader};
use cis_infrastructure::logging::init_logging;
use tracing::info;

use crate::admin::{AdminAuthConfig, DashboardState, admin_rocket, rocket_config};

/// Run the dashboard server
///
/// Returns when Rocket shuts down (Ctrl+C or SIGTERM).
pub async fn run(
    config_path: Option<&Path>,
    snapshot_path: Option<&Path>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let config = load_config(config_path, snapshot_path, port)?;
    init_logging(&config.logging)?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        snapshot = %config.dashboard.snapshot_path.display(),
        admin_auth = config.auth.admin.enabled,
        "Starting connector indexing status dashboard"
    );

    let state = DashboardState::from_config(&config).context("Failed to build dashboard state")?;
    let auth_config = Arc::new(AdminAuthConfig::from_app_config(&config));

    admin_rocket(state, auth_config)
        .configure(rocket_config(&config.server))
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket launch failed: {e}"))?;

    info!("Dashboard server stopped");
    Ok(())
}

/// Load configuration and apply command line overrides
pub fn load_config(
    config_path: Option<&Path>,
    snapshot_path: Option<&Path>,
    port: Option<u16>,
) -> anyhow::Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load().context("Failed to load configuration")?;

    if let Some(path) = snapshot_path {
        config.dashboard.snapshot_path = path.to_path_buf();
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    validate_app_config(&config)?;

    Ok(config)
}
