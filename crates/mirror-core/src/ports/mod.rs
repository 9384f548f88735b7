//! # Ports Module
//!
//! Inbound API traits and the outbound event sink.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
