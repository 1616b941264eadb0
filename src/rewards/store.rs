//! Key-value persistence contract.
//!
//! The hosting application owns real persistence (browser local storage,
//! a file, a database). The ledger only depends on this string key-value
//! contract; the engine itself never touches it.

use rustc_hash::FxHashMap;

/// String key-value store, the persistence collaborator contract.
pub trait PointsStore {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: String);

    /// Delete a key. Absent keys are fine.
    fn remove(&mut self, key: &str);
}

/// In-memory store for tests and non-persistent hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PointsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
