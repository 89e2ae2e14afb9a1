//! Broadcast dispatcher: sequential fan-out with a fixed inter-send delay.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::domain::entities::{SendResult, TargetId};
use crate::ports::outbound::MessageSender;

/// Fans one message out to an ordered target list through a
/// [`MessageSender`].
///
/// Sends are strictly sequential, so outbound concurrency toward the API is
/// one by construction and results come back in input order. Each dispatch
/// owns its result accumulator; the dispatcher itself holds no mutable
/// state and can be shared freely.
pub struct BroadcastDispatcher {
    sender: Arc<dyn MessageSender>,
}

impl BroadcastDispatcher {
    /// Create a dispatcher over the given sender.
    pub fn new(sender: Arc<dyn MessageSender>) -> Self {
        Self { sender }
    }

    /// Send `text` to every target in order, collecting one [`SendResult`]
    /// per target.
    ///
    /// A faulting target is recorded and the batch continues; there is no
    /// early termination and no cancellation of a started batch. When
    /// `inter_delay` is non-zero the task suspends for that long after every
    /// attempt, failed ones included. Duplicated targets each get their own
    /// send. An empty target list returns an empty result list without
    /// touching the sender.
    pub async fn dispatch(
        &self,
        targets: &[TargetId],
        text: &str,
        inter_delay: Duration,
    ) -> Vec<SendResult> {
        let mut results = Vec::with_capacity(targets.len());

        for target in targets {
            let result = match self.sender.send(target, text).await {
                Ok(reply) => SendResult::answered(target.clone(), reply),
                Err(e) => {
                    warn!(target = %target, error = %e, "send attempt faulted");
                    SendResult::faulted(target.clone(), e.to_string())
                }
            };
            results.push(result);

            if !inter_delay.is_zero() {
                tokio::time::sleep(inter_delay).await;
            }
        }

        info!(
            targets = targets.len(),
            delivered = results.iter().filter(|r| r.ok).count(),
            "broadcast complete"
        );
        results
    }
}
