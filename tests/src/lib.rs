//! # State Mirror Test Suite
//!
//! End-to-end flows against a real secp256k1 oracle.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── fixtures.rs      # Oracle + mirror harness
//!     ├── transitions.rs   # State, root and combined transitions
//!     ├── admin.rs         # Signer rotation, source change, upgrades
//!     └── concurrency.rs   # SharedMirror readers and writers
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p mirror-tests
//! cargo test -p mirror-tests integration::admin::
//! ```

pub mod integration;
