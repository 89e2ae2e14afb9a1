//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the broadcast dispatcher requires the host to provide.

use async_trait::async_trait;

use crate::domain::entities::{ApiReply, TargetId};
use crate::domain::errors::SendError;

/// Abstract interface for delivering one message to one recipient.
///
/// Production: `TelegramSender` (adapters/telegram.rs).
/// Testing: scripted in-memory senders.
///
/// `Ok` means the API answered (the reply itself may still carry
/// `ok: false`); `Err` means the attempt never produced an API response.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, target: &TargetId, text: &str) -> Result<ApiReply, SendError>;
}
