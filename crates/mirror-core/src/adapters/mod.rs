//! # Adapters
//!
//! Concrete implementations of the outbound ports.

pub mod events;

pub use events::{NoopEventSink, RecordingEventSink};
