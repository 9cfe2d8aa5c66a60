//! In-process stores.

use super::{KeyValueStore, StorageKey};
use std::collections::HashMap;
use tracing::instrument;

/// Keeps values in memory for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<StorageKey, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.values.get(&key).cloned()
    }

    #[instrument(skip(self, value))]
    fn set(&mut self, key: StorageKey, value: &str) {
        self.values.insert(key, value.to_string());
    }

    fn remove(&mut self, key: StorageKey) {
        self.values.remove(&key);
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

/// Stand-in used when no storage is available: remembers nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl KeyValueStore for NullStore {
    fn get(&self, _key: StorageKey) -> Option<String> {
        None
    }

    fn set(&mut self, _key: StorageKey, _value: &str) {}

    fn remove(&mut self, _key: StorageKey) {}

    fn clear(&mut self) {}
}
