//! # Outbound Ports (Driven Ports)
//!
//! The storage interface the repository requires the host to provide.

use serde_json::Value;

use crate::domain::errors::StoreError;

/// Abstract interface for JSON key-value storage.
///
/// Production: `FileKvStore` (adapters/file.rs).
/// Testing: `MemoryKvStore` (adapters/memory.rs).
///
/// `put` replaces whole values; there is no compare-and-swap, so concurrent
/// writers get last-write-wins semantics.
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under a key.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Store a value under a key, replacing any previous value.
    fn put(&mut self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Remove a key. Removing an absent key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        (**self).put(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }
}
