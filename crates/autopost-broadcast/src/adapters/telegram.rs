//! Telegram Bot API adapter for the [`MessageSender`] port.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::domain::entities::{ApiReply, TargetId};
use crate::domain::errors::SendError;
use crate::ports::outbound::MessageSender;

/// Default Bot API host.
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Fixed rich-text render mode for outgoing messages.
const PARSE_MODE: &str = "HTML";

/// Sends messages through the Telegram Bot API `sendMessage` endpoint.
///
/// Owns its HTTP client and the bot token; the token is injected at
/// construction rather than read from ambient state.
pub struct TelegramSender {
    client: Client,
    token: String,
    base_url: String,
}

impl TelegramSender {
    /// Create a sender against the production Bot API host.
    pub fn new(token: impl Into<String>) -> Result<Self, SendError> {
        Self::with_base_url(token, TELEGRAM_API_BASE)
    }

    /// Create a sender against an alternate host (local API server, tests).
    pub fn with_base_url(
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, SendError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(2))
            .build()
            .map_err(|e| SendError::Http(e.to_string()))?;

        Ok(Self {
            client,
            token: token.into(),
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl MessageSender for TelegramSender {
    async fn send(&self, target: &TargetId, text: &str) -> Result<ApiReply, SendError> {
        if self.token.is_empty() {
            return Err(SendError::MissingCredential);
        }

        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let payload = serde_json::json!({
            "chat_id": target,
            "text": text,
            "parse_mode": PARSE_MODE,
        });

        debug!(target = %target, "sending message");
        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| SendError::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or_else(|_| serde_json::json!({ "ok": false, "error": "invalid_json_response" }));

        if !status.is_success() {
            warn!(target = %target, status = status.as_u16(), "messaging API rejected send");
            return Ok(ApiReply {
                ok: false,
                status: Some(status.as_u16()),
                body,
            });
        }

        let ok = body.get("ok").and_then(serde_json::Value::as_bool).unwrap_or(false);
        Ok(ApiReply {
            ok,
            status: None,
            body,
        })
    }
}
