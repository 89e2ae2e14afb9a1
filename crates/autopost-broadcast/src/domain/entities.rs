//! Core data structures for broadcast dispatch.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recipient identifier as the client supplied it: a chat id number or an
/// opaque string. Preserved untagged in JSON, and equality is
/// type-sensitive, so `42` and `"42"` are distinct recipients.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetId::Numeric(id) => write!(f, "{}", id),
            TargetId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for TargetId {
    fn from(id: i64) -> Self {
        TargetId::Numeric(id)
    }
}

impl From<&str> for TargetId {
    fn from(id: &str) -> Self {
        TargetId::Text(id.to_string())
    }
}

/// The messaging API's answer for one send that produced a response.
///
/// `status` is present only when the API returned a non-success HTTP status,
/// letting callers tell "reachable but rejected" apart from a transport
/// fault (which is a [`crate::SendError`] instead).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiReply {
    /// Whether the API accepted the message.
    pub ok: bool,
    /// HTTP status of a rejected request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Response body as returned (or a sentinel when unparseable).
    pub body: serde_json::Value,
}

/// Outcome of one send attempt within a broadcast.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SendResult {
    pub target: TargetId,
    pub ok: bool,
    /// The API's reply, when one was received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<ApiReply>,
    /// Description of the fault, when the send never reached the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendResult {
    /// A send that got an answer from the API; success tracks the reply.
    pub fn answered(target: TargetId, reply: ApiReply) -> Self {
        Self {
            target,
            ok: reply.ok,
            response: Some(reply),
            error: None,
        }
    }

    /// A send that faulted before any API response.
    pub fn faulted(target: TargetId, error: impl Into<String>) -> Self {
        Self {
            target,
            ok: false,
            response: None,
            error: Some(error.into()),
        }
    }
}

/// One completed broadcast: timestamp, message, target snapshot, and the
/// per-target results in dispatch order. Immutable once created; the store
/// layer appends these to a bounded history log.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BroadcastRecord {
    pub at: DateTime<Utc>,
    pub message: String,
    pub targets: Vec<TargetId>,
    pub results: Vec<SendResult>,
}
