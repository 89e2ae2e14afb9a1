//! Persistence for the Autopost gateway.
//!
//! A small JSON key-value port ([`KeyValueStore`]) with two adapters (an
//! in-memory map for tests, a file-backed map for deployments) plus a
//! typed [`StateRepository`] that owns the three persisted keys:
//!
//! - `targets` - the broadcast recipient list (append if absent)
//! - `history` - bounded broadcast log, most-recent 20 kept
//! - `opens`   - bounded open-event log, most-recent 200 kept
//!
//! The port offers no compare-and-swap; concurrent writers race with
//! last-write-wins semantics, which this system accepts for its
//! single-operator usage. Callers needing strict consistency must serialize
//! administrative operations themselves.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::file::FileKvStore;
pub use adapters::memory::MemoryKvStore;
pub use domain::entities::OpenEvent;
pub use domain::errors::StoreError;
pub use ports::outbound::KeyValueStore;
pub use service::{StateRepository, HISTORY_CAPACITY, OPENS_CAPACITY};
