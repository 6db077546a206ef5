//! Admin dashboard
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | JSON view, drill-down routes and liveness probe |
//! | [`auth`] | Admin API key request guard |
//! | [`cookie_store`] | Toggle state kept in a cookie |
//! | [`query`] | Filter and search query parameters |
//! | [`server`] | Rocket assembly and launch configuration |
//! | [`state`] | Shared dashboard state |
//! | [`web`] | Server-rendered dashboard page |

pub mod api;
pub mod auth;
pub mod cookie_store;
pub mod query;
pub mod server;
pub mod state;
pub mod web;

pub use auth::{AdminAuth, AdminAuthConfig};
pub use server::{admin_rocket, rocket_config};
pub use state::DashboardState;
