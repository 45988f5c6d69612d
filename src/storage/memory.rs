use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use super::{KeyValueStore, StorageError};

/// In-memory store. Clones share the same map, so a test can keep a handle
/// and inspect what a service persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the value under `key`.
    pub fn peek(&self, key: &str) -> Option<Value> {
        self.entries.lock().get(key).cloned()
    }

    /// Seed a value without going through a service.
    pub fn insert(&self, key: &str, value: Value) {
        self.entries.lock().insert(key.to_string(), value);
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.peek(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        self.insert(key, value);
        Ok(())
    }
}
