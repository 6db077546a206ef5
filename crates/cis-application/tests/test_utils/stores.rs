//! In-memory toggle state stores

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use cis_domain::error::{Error, Result};
use cis_domain::ports::ToggleStateStore;

/// Store sharing its value with the test through an `Rc`
#[derive(Clone, Default)]
pub struct SharedStore {
    value: Rc<RefCell<Option<String>>>,
    saves: Rc<Cell<usize>>,
}

impl SharedStore {
    /// Store pre-seeded with a raw value
    pub fn with_value(raw: &str) -> Self {
        let store = Self::default();
        *store.value.borrow_mut() = Some(raw.to_string());
        store
    }

    /// Last saved value
    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    /// Number of writes so far
    pub fn saves(&self) -> usize {
        self.saves.get()
    }
}

impl ToggleStateStore for SharedStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.value.borrow().clone())
    }

    fn save(&self, value: &str) -> Result<()> {
        *self.value.borrow_mut() = Some(value.to_string());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

/// Store whose every operation fails
pub struct BrokenStore;

impl ToggleStateStore for BrokenStore {
    fn load(&self) -> Result<Option<String>> {
        Err(Error::io("store unavailable"))
    }

    fn save(&self, _value: &str) -> Result<()> {
        Err(Error::io("store unavailable"))
    }
}
