//! Init-data verification service.
//!
//! Key derivation and MAC check per the Telegram WebApp scheme: the signing
//! key is `SHA-256(bot_token)`, never the raw secret, and the MAC is
//! HMAC-SHA256 over the canonicalized field string.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::domain::payload::SignedPayload;

type HmacSha256 = Hmac<Sha256>;

/// Verifier for signed init-data payloads.
///
/// Holds only the derived signing key; construct once per secret and reuse
/// across requests. Pure: `verify` has no side effects.
pub struct InitDataVerifier {
    signing_key: [u8; 32],
}

impl InitDataVerifier {
    /// Derive the signing key from the shared secret (the bot token).
    pub fn new(secret: &str) -> Self {
        let digest = Sha256::digest(secret.as_bytes());
        Self {
            signing_key: digest.into(),
        }
    }

    /// Check a raw payload string against its embedded hash.
    ///
    /// Returns `false` for any malformed input: missing or duplicated hash,
    /// non-hex hash, wrong MAC length. Nothing propagates past this boundary.
    /// The MAC comparison itself is constant-time (`Mac::verify_slice`), and
    /// hex decoding makes the hash check case-insensitive.
    pub fn verify(&self, payload: &str) -> bool {
        let parsed = match SignedPayload::parse(payload) {
            Ok(p) => p,
            Err(e) => {
                debug!(error = %e, "rejecting unparseable init-data payload");
                return false;
            }
        };

        let claimed = match hex::decode(parsed.hash()) {
            Ok(bytes) => bytes,
            Err(_) => {
                debug!("rejecting init-data payload with non-hex hash");
                return false;
            }
        };

        let mut mac = match HmacSha256::new_from_slice(&self.signing_key) {
            Ok(m) => m,
            Err(_) => return false,
        };
        mac.update(parsed.canonical_string().as_bytes());
        mac.verify_slice(&claimed).is_ok()
    }
}

/// One-shot helper: derive the key and verify in a single call.
pub fn verify_init_data(payload: &str, secret: &str) -> bool {
    InitDataVerifier::new(secret).verify(payload)
}
