//! # Shared Types Crate
//!
//! Primitive types shared by every crate in the workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Hash`, `Address` and `U256` are defined once.
//! - **Fixed Width**: every value that ends up in a signed payload has a fixed
//!   byte width (20-byte addresses, 32-byte big-endian words).

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
