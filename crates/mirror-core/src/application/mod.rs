//! # Application Layer
//!
//! The coordinator and its shared handle.

pub mod service;
pub mod shared;

pub use service::MirrorCoordinator;
pub use shared::SharedMirror;
