//! # Error Types
//!
//! Parse errors for the textual forms of shared primitives.

use thiserror::Error;

/// Errors raised while parsing hex or decimal input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Input is not valid hex.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded input has the wrong byte length.
    #[error("Wrong length: expected {expected} bytes, got {got}")]
    WrongLength { expected: usize, got: usize },

    /// Input is not a valid unsigned decimal that fits 256 bits.
    #[error("Invalid 256-bit integer: {0}")]
    InvalidInteger(String),
}
