//! # Event Sinks
//!
//! In-process `MirrorEventSink` implementations.

use crate::domain::MirrorEvent;
use crate::ports::outbound::MirrorEventSink;
use parking_lot::Mutex;

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopEventSink;

impl MirrorEventSink for NoopEventSink {
    fn publish(&self, _event: MirrorEvent) {}
}

/// Keeps every event in publication order.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<MirrorEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events so far.
    pub fn events(&self) -> Vec<MirrorEvent> {
        self.events.lock().clone()
    }

    /// Take every event recorded so far.
    pub fn drain(&self) -> Vec<MirrorEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl MirrorEventSink for RecordingEventSink {
    fn publish(&self, event: MirrorEvent) {
        self.events.lock().push(event);
    }
}
