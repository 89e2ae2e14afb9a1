//! Autopost Gateway - HTTP surface for the Telegram mini app backend.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      GATEWAY (axum)                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  GET  /            GET  /health        GET  /api/history     │
//! │  POST /api/add_target   POST /api/post                       │
//! │  POST /api/track_open   POST /api/verify_init                │
//! │         │                                                    │
//! │  ┌──────┴──────────────────────────────┐                     │
//! │  │  Middleware: Trace → CORS (permissive)                    │
//! │  └──────┬──────────────────────────────┘                     │
//! │         │                                                    │
//! │  ┌──────┴───────┐  ┌───────────────┐  ┌───────────────────┐  │
//! │  │ InitData     │  │ Broadcast     │  │ StateRepository   │  │
//! │  │ verification │  │ dispatcher    │  │ (targets/history/ │  │
//! │  │ (HMAC)       │  │ (sequential)  │  │  opens)           │  │
//! │  └──────────────┘  └───────┬───────┘  └───────────────────┘  │
//! └────────────────────────────┼─────────────────────────────────┘
//!                              │
//!                     Telegram Bot API
//! ```
//!
//! Every response carries the permissive CORS policy; failures use the
//! `{ok: false, error}` envelope with the status mapped from the error
//! taxonomy. The store, the message sender, and the credentials are all
//! injected at construction; the gateway holds no ambient state.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod handlers;
pub mod middleware;
pub mod page;
pub mod router;
pub mod service;

// Re-exports for public API
pub use domain::config::{ConfigError, GatewayConfig};
pub use domain::error::{ApiError, GatewayError};
pub use handlers::AppState;
pub use router::build_router;
pub use service::GatewayService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
