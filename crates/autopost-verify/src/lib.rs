//! Verification of the signed `initData` payload a Telegram WebApp client
//! hands to the backend.
//!
//! The payload is a URL-query style field set carrying a `hash` field. The
//! platform signs the remaining fields with HMAC-SHA256 keyed by
//! `SHA-256(bot_token)`; [`InitDataVerifier`] re-derives that MAC over the
//! canonicalized field string and checks it against the embedded hash.
//!
//! Verification failure is data, not an error: every malformed input path
//! collapses to `false`.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod service;

pub use domain::errors::PayloadError;
pub use domain::payload::SignedPayload;
pub use service::{verify_init_data, InitDataVerifier};
