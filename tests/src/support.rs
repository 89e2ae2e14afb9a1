//! Shared test fixtures: a reference init-data signer and a scripted
//! message sender.

use std::sync::Arc;

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use parking_lot::Mutex;
use sha2::{Digest, Sha256};

use autopost_broadcast::{ApiReply, MessageSender, SendError, TargetId};

type HmacSha256 = Hmac<Sha256>;

/// Sign a field set the way the platform does: HMAC-SHA256 over the sorted
/// `key=value` lines of the DECODED values, keyed by `SHA-256(secret)`.
/// The returned query string carries the values percent-encoded, with the
/// tag appended as `hash`.
pub fn sign_init_data(fields: &[(&str, &str)], secret: &str) -> String {
    let mut sorted: Vec<_> = fields.to_vec();
    sorted.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
    let check_string = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("\n");

    let key = Sha256::digest(secret.as_bytes());
    let mut mac = HmacSha256::new_from_slice(&key).expect("HMAC accepts any key size");
    mac.update(check_string.as_bytes());
    let tag = hex::encode(mac.finalize().into_bytes());

    let mut query = fields
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>();
    query.push(format!("hash={}", tag));
    query.join("&")
}

/// Encode everything outside the unreserved set, as the platform's query
/// serialization does.
fn percent_encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for b in raw.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

/// Message sender that answers from a script and records every call.
pub struct ScriptedSender {
    calls: Mutex<Vec<(TargetId, String)>>,
    fail_on: Option<TargetId>,
}

impl ScriptedSender {
    /// A sender that accepts everything.
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_on: None,
        })
    }

    /// A sender that raises a transport fault for one target.
    pub fn failing_on(target: TargetId) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_on: Some(target),
        })
    }

    /// Every `(target, text)` pair seen so far, in call order.
    pub fn calls(&self) -> Vec<(TargetId, String)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl MessageSender for ScriptedSender {
    async fn send(&self, target: &TargetId, text: &str) -> Result<ApiReply, SendError> {
        self.calls.lock().push((target.clone(), text.to_string()));
        if self.fail_on.as_ref() == Some(target) {
            return Err(SendError::Http("connect timeout".to_string()));
        }
        Ok(ApiReply {
            ok: true,
            status: None,
            body: serde_json::json!({"ok": true, "result": {"message_id": 1}}),
        })
    }
}
