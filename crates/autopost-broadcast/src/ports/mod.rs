//! Hexagonal ports for the broadcast subsystem.

pub mod outbound;
