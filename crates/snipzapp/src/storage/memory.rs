use super::SnippetStorage;
use crate::error::{Result, SnipzError};
use crate::model::Snippet;
use std::cell::{Cell, RefCell};

/// In-memory storage backend for testing.
///
/// Uses `RefCell`/`Cell` so the trait can take `&self`; the engine is
/// single-threaded.
#[derive(Default)]
pub struct MemStorage {
    items: RefCell<Vec<Snippet>>,
    saves: Cell<usize>,
    simulate_load_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `items` already persisted.
    pub fn with_items(items: Vec<Snippet>) -> Self {
        let storage = Self::default();
        *storage.items.borrow_mut() = items;
        storage
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Snapshot of what is currently persisted.
    pub fn persisted(&self) -> Vec<Snippet> {
        self.items.borrow().clone()
    }

    pub fn set_simulate_load_error(&self, simulate: bool) {
        self.simulate_load_error.set(simulate);
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }
}

impl SnippetStorage for MemStorage {
    fn load(&self) -> Result<Vec<Snippet>> {
        if self.simulate_load_error.get() {
            return Err(SnipzError::Store("Simulated load error".to_string()));
        }
        Ok(self.items.borrow().clone())
    }

    fn save(&self, items: &[Snippet]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(SnipzError::Store("Simulated write error".to_string()));
        }
        *self.items.borrow_mut() = items.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
