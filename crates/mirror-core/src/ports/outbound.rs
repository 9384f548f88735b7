//! # Outbound Ports
//!
//! Where committed changes are reported.

use crate::domain::MirrorEvent;
use std::sync::Arc;

/// Receives one event per committed operation, after the commit.
pub trait MirrorEventSink: Send + Sync {
    fn publish(&self, event: MirrorEvent);
}

impl<T: MirrorEventSink + ?Sized> MirrorEventSink for Arc<T> {
    fn publish(&self, event: MirrorEvent) {
        (**self).publish(event);
    }
}
