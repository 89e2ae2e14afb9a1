//! Broadcast fan-out for the Autopost gateway.
//!
//! One message goes to an ordered list of recipients, sequentially, through
//! the [`MessageSender`] outbound port. Sequential iteration bounds outbound
//! concurrency to the messaging API by construction and keeps result order
//! equal to input order; an optional fixed delay separates sends.
//!
//! Per-target faults are recorded, never propagated: a batch always runs its
//! full target list and returns one [`SendResult`] per recipient.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::telegram::TelegramSender;
pub use domain::entities::{ApiReply, BroadcastRecord, SendResult, TargetId};
pub use domain::errors::SendError;
pub use ports::outbound::MessageSender;
pub use service::BroadcastDispatcher;
