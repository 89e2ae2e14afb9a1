//! File-backed key-value store.
//!
//! Keeps the full map in memory and persists it as one JSON object file,
//! suitable for the few small values this system stores. Writes go through
//! a temp file and an atomic rename so a crash mid-write never leaves a
//! torn file behind.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};

use crate::domain::errors::StoreError;
use crate::ports::outbound::KeyValueStore;

pub struct FileKvStore {
    data: HashMap<String, Value>,
    path: PathBuf,
}

impl FileKvStore {
    /// Open a store at the given path, loading any existing contents.
    ///
    /// A missing file starts empty; an unreadable or non-object file is
    /// treated as empty rather than refusing to start.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let data = Self::load(&path).unwrap_or_default();

        if data.is_empty() {
            info!(path = %path.display(), "store file empty or not found");
        } else {
            info!(path = %path.display(), keys = data.len(), "loaded store file");
        }

        Self { data, path }
    }

    fn load(path: &Path) -> Option<HashMap<String, Value>> {
        let bytes = std::fs::read(path).ok()?;
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Some(map.into_iter().collect()),
            Ok(_) => {
                warn!(path = %path.display(), "store file is not a JSON object, starting empty");
                None
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "store file unreadable, starting empty");
                None
            }
        }
    }

    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(StoreError::io)?;
            }
        }

        let map: serde_json::Map<String, Value> = self
            .data
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let bytes = serde_json::to_vec(&Value::Object(map)).map_err(StoreError::serialization)?;

        // Write atomically via temp file.
        let temp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path).map_err(StoreError::io)?;
        file.write_all(&bytes).map_err(StoreError::io)?;
        file.sync_all().map_err(StoreError::io)?;
        std::fs::rename(&temp_path, &self.path).map_err(StoreError::io)?;

        Ok(())
    }
}

impl KeyValueStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.data.insert(key.to_string(), value);
        self.save()
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.data.remove(key);
        self.save()
    }
}
