//! In-memory toggle state store

use std::sync::{Arc, Mutex};

use cis_domain::error::{Error, Result};
use cis_domain::ports::ToggleStateStore;

/// Process-local store for the serialized expand/collapse map
///
/// Clones share the same value.
#[derive(Debug, Clone, Default)]
pub struct InMemoryToggleStore {
    value: Arc<Mutex<Option<String>>>,
}

impl InMemoryToggleStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a serialized map
    pub fn with_value<S: Into<String>>(value: S) -> Self {
        Self {
            value: Arc::new(Mutex::new(Some(value.into()))),
        }
    }
}

impl ToggleStateStore for InMemoryToggleStore {
    fn load(&self) -> Result<Option<String>> {
        let guard = self
            .value
            .lock()
            .map_err(|e| Error::internal(format!("Toggle store lock poisoned: {e}")))?;
        Ok(guard.clone())
    }

    fn save(&self, value: &str) -> Result<()> {
        let mut guard = self
            .value
            .lock()
            .map_err(|e| Error::internal(format!("Toggle store lock poisoned: {e}")))?;
        *guard = Some(value.to_string());
        Ok(())
    }
}
