//! Hexagonal ports for the store subsystem.

pub mod outbound;
