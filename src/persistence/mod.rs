//! Best score persistence
//!
//! Storage is a flat key/value map of numbers:
//! - `MemoryStorage` for tests and headless runs
//! - `FileStorage` (native) keeps a versioned JSON envelope on disk
//! - LocalStorage on web lives in `platform::web`

pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

/// Default key the best score is stored under
pub const BEST_SCORE_KEY: &str = "hs";

/// Numeric key/value storage
pub trait Storage {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> Option<f64>;
    /// Store `value` under `key`. Failures are logged, never surfaced.
    fn set(&mut self, key: &str, value: f64);
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Option<f64> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: f64) {
        (**self).set(key, value)
    }
}

/// Read the best score, treating absent or garbage values as 0
pub fn load_best(storage: &dyn Storage, key: &str) -> u64 {
    match storage.get(key) {
        Some(v) if v.is_finite() && v > 0.0 => v.floor() as u64,
        _ => 0,
    }
}

/// Write the best score
pub fn store_best(storage: &mut dyn Storage, key: &str, best: u64) {
    storage.set(key, best as f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_best_defaults_to_zero() {
        let storage = MemoryStorage::new();
        assert_eq!(load_best(&storage, BEST_SCORE_KEY), 0);
    }

    #[test]
    fn test_load_best_rejects_garbage() {
        let mut storage = MemoryStorage::new();
        storage.set(BEST_SCORE_KEY, f64::NAN);
        assert_eq!(load_best(&storage, BEST_SCORE_KEY), 0);
        storage.set(BEST_SCORE_KEY, -20.0);
        assert_eq!(load_best(&storage, BEST_SCORE_KEY), 0);
        storage.set(BEST_SCORE_KEY, 120.7);
        assert_eq!(load_best(&storage, BEST_SCORE_KEY), 120);
    }

    #[test]
    fn test_store_then_load() {
        let mut storage = MemoryStorage::new();
        store_best(&mut storage, "best", 340);
        assert_eq!(load_best(&storage, "best"), 340);
        assert_eq!(load_best(&storage, BEST_SCORE_KEY), 0);
    }
}
