//! Rocket assembly

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use cis_infrastructure::config::ServerConfig;
use rocket::config::{Config as RocketConfig, LogLevel};
use rocket::{Build, Rocket, catchers};

use super::api::{self, api_routes};
use super::auth::AdminAuthConfig;
use super::state::DashboardState;
use super::web::web_routes;

/// Rocket launch settings for the `server` section
///
/// An unparsable host falls back to `127.0.0.1`.
pub fn rocket_config(server: &ServerConfig) -> RocketConfig {
    let address: IpAddr = server.host.parse().unwrap_or_else(|e| {
        tracing::warn!(host = %server.host, error = %e, "Invalid bind address, using localhost");
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    });
    RocketConfig {
        address,
        port: server.port,
        log_level: LogLevel::Normal,
        ..RocketConfig::default()
    }
}

/// Dashboard rocket with state, routes and JSON catchers for `/api`
pub fn admin_rocket(state: DashboardState, auth_config: Arc<AdminAuthConfig>) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .manage(auth_config)
        .mount("/", web_routes())
        .mount("/", api_routes())
        .register("/api", catchers![api::unauthorized, api::unavailable])
}
