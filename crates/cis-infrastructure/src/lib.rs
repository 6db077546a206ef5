//! # Infrastructure Layer
//!
//! Technical concerns supporting the dashboard: configuration, logging and
//! the adapters that implement the `cis-domain` ports.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based layered configuration (defaults, TOML, env) |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Adapters
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Snapshot sources, source catalog, feature flags, toggle store |
//!
//! ### Utilities
//! | Module | Description |
//! |--------|-------------|
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`utils`] | Number and relative time formatting |

pub mod adapters;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod utils;

pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
