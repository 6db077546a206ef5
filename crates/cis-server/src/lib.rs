//! # Connector Indexing Status Server
//!
//! Admin dashboard showing connector indexing status grouped by source type.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cis_server::run;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Default config (cis.toml lookup + CIS__ environment)
//!     run(None, None, None).await
//! }
//! ```
//!
//! ## Architecture
//!
//! Every request reloads the snapshot, recomputes the view with the pure
//! functions from `cis-application` and renders it with Tera. The only
//! per-user state is the expand/collapse map, kept in a cookie.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`admin`] | Rocket routes, request guards, web UI and JSON API |
//! | [`init`] | Configuration loading, logging setup and launch |
//! | [`constants`] | Route paths used to build links and redirects |

pub mod admin;
pub mod constants;
pub mod init;

pub use init::run;
