//! Configuration management
//!
//! Layered configuration: compiled-in defaults, an optional TOML file, then
//! `CIS__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
