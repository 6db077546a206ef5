//! Toggle State Store Port
//!
//! Defines the contract for persisting the expand/collapse map as one
//! serialized value (a cookie in the web UI).

use crate::error::Result;

/// Persistence for the serialized toggle map
pub trait ToggleStateStore {
    /// Load the stored value, `None` when nothing was saved yet
    fn load(&self) -> Result<Option<String>>;

    /// Replace the stored value
    fn save(&self, value: &str) -> Result<()>;
}
