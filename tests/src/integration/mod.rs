//! Cross-crate integration flows.

pub mod broadcast_flow;
