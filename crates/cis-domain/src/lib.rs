//! Domain Layer - Connector Indexing Status
//!
//! Core records, value objects and collaborator contracts for the admin
//! dashboard that shows connector indexing status grouped by source type.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Connector, federated connector and snapshot records |
//! | [`value_objects`] | Source types, statuses, filters, summaries, toggle state |
//! | [`ports`] | Traits for persistence, feature flags, data and source metadata |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Cookie name, navigation paths, hidden sources |
//!
//! This crate has no framework dependencies: everything above it (grouping,
//! rendering, HTTP) builds on these types.

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{ConnectorIndexingStatus, FederatedConnectorDetail, IndexingSnapshot};
pub use error::{Error, Result};
