//! Configuration types module

pub mod app;
pub mod auth;
pub mod dashboard;
pub mod features;
pub mod logging;
pub mod server;

// Re-export main types
pub use app::*;
pub use auth::*;
pub use dashboard::*;
pub use features::*;
pub use logging::*;
pub use server::*;
