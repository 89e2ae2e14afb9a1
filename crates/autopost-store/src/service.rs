//! Typed state repository over the key-value port.
//!
//! Owns the persisted keys and the bounded-log policy; callers never touch
//! raw keys. Stored values that are absent or malformed read as empty: the
//! store is advisory state, not a source of truth worth failing over.

use autopost_broadcast::{BroadcastRecord, TargetId};
use serde_json::Value;

use crate::domain::entities::OpenEvent;
use crate::domain::errors::StoreError;
use crate::ports::outbound::KeyValueStore;

const TARGETS_KEY: &str = "targets";
const HISTORY_KEY: &str = "history";
const OPENS_KEY: &str = "opens";

/// Broadcast records retained in the history log.
pub const HISTORY_CAPACITY: usize = 20;

/// Open events retained in the opens log.
pub const OPENS_CAPACITY: usize = 200;

/// Typed access to the gateway's persisted state.
pub struct StateRepository {
    store: Box<dyn KeyValueStore>,
}

impl StateRepository {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The stored recipient list, in insertion order. Absent or malformed
    /// state reads as empty.
    pub fn targets(&self) -> Result<Vec<TargetId>, StoreError> {
        Ok(self
            .store
            .get(TARGETS_KEY)?
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default())
    }

    /// Append a recipient if it is not already present, persist, and return
    /// the updated list.
    pub fn add_target(&mut self, id: TargetId) -> Result<Vec<TargetId>, StoreError> {
        let mut list = self.targets()?;
        if !list.contains(&id) {
            list.push(id);
        }
        let value = serde_json::to_value(&list).map_err(StoreError::serialization)?;
        self.store.put(TARGETS_KEY, value)?;
        Ok(list)
    }

    /// The broadcast history as stored, oldest first. Absent reads as `[]`.
    pub fn history(&self) -> Result<Value, StoreError> {
        self.bounded_log(HISTORY_KEY)
    }

    /// Append a broadcast record, evicting the oldest beyond
    /// [`HISTORY_CAPACITY`].
    pub fn record_broadcast(&mut self, record: &BroadcastRecord) -> Result<(), StoreError> {
        let entry = serde_json::to_value(record).map_err(StoreError::serialization)?;
        self.append_bounded(HISTORY_KEY, entry, HISTORY_CAPACITY)
    }

    /// The open-event log as stored, oldest first.
    pub fn opens(&self) -> Result<Value, StoreError> {
        self.bounded_log(OPENS_KEY)
    }

    /// Append an open event, evicting the oldest beyond [`OPENS_CAPACITY`].
    pub fn record_open(&mut self, event: &OpenEvent) -> Result<(), StoreError> {
        let entry = serde_json::to_value(event).map_err(StoreError::serialization)?;
        self.append_bounded(OPENS_KEY, entry, OPENS_CAPACITY)
    }

    fn bounded_log(&self, key: &str) -> Result<Value, StoreError> {
        Ok(match self.store.get(key)? {
            Some(Value::Array(entries)) => Value::Array(entries),
            _ => Value::Array(Vec::new()),
        })
    }

    fn append_bounded(
        &mut self,
        key: &str,
        entry: Value,
        capacity: usize,
    ) -> Result<(), StoreError> {
        let mut log = match self.store.get(key)? {
            Some(Value::Array(entries)) => entries,
            _ => Vec::new(),
        };
        log.push(entry);
        if log.len() > capacity {
            log.drain(..log.len() - capacity);
        }
        self.store.put(key, Value::Array(log))
    }
}
