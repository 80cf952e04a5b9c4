//! In-memory storage

use std::collections::HashMap;

use super::Storage;

/// Storage that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, f64>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), value);
        self.writes += 1;
    }
}
