//! In-memory key-value store for unit tests and ephemeral runs.

use std::collections::HashMap;

use serde_json::Value;

use crate::domain::errors::StoreError;
use crate::ports::outbound::KeyValueStore;

/// HashMap-backed store; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    data: HashMap<String, Value>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.data.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.data.remove(key);
        Ok(())
    }
}
