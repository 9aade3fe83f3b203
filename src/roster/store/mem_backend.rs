use super::backend::StorageBackend;
use crate::error::{Result, RosterError};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since roster is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    entries: RefCell<HashMap<String, String>>,
    writes: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with a raw value, e.g. to test loading of damaged data.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let backend = Self::new();
        backend
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl StorageBackend for MemBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(RosterError::Store("Simulated write error".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}
