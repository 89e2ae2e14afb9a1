//! Persisted entities owned by the store layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One mini-app open reported by the client, stored verbatim in the bounded
/// `opens` log.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OpenEvent {
    pub at: DateTime<Utc>,
    /// Raw request body as the client sent it.
    pub data: serde_json::Value,
}
