//! # Domain Errors
//!
//! Error taxonomy for the state mirror. Every failure is synchronous and
//! leaves the mirror unchanged.

use shared_types::U256;
use std::fmt;
use thiserror::Error;

/// Key of a ledger record, carried by `MirrorError::DuplicateRecord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKey {
    /// Per-identity state record.
    State {
        /// Identity the state belongs to
        identity: U256,
        /// State value
        state: U256,
    },
    /// Global GIST root record.
    Root(U256),
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::State { identity, state } => {
                write!(f, "state {state} of identity {identity}")
            }
            RecordKey::Root(root) => write!(f, "GIST root {root}"),
        }
    }
}

/// Reasons a public key is rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PublicKeyError {
    /// Key is not exactly 64 bytes (x ‖ y).
    #[error("wrong public key length: expected 64 bytes, got {got}")]
    WrongLength {
        /// Length that was supplied
        got: usize,
    },

    /// A coordinate is zero modulo the field prime.
    #[error("zero public key coordinate")]
    Zero,

    /// Point does not satisfy y² = x³ + 7 (mod p).
    #[error("public key not on the secp256k1 curve")]
    NotOnCurve,
}

/// Errors returned by mirror operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MirrorError {
    /// The record key is already stored. Once attested, a key can never be
    /// attested again.
    #[error("unable to update already stored record: {0}")]
    DuplicateRecord(RecordKey),

    /// Signature does not recover to the current signer. A stale or wrong
    /// nonce signs a different message and lands here too.
    #[error("invalid signature")]
    InvalidSignature,

    /// Supplied public key is malformed.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(#[from] PublicKeyError),

    /// A null address or value was supplied where a real one is required.
    #[error("zero target")]
    ZeroTarget,

    /// The unauthenticated upgrade path is permanently off.
    #[error("this upgrade method is off")]
    UpgradeDisabled,

    /// Construction parameters are unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Low-level reasons a signature cannot be checked. Never leaves the crate:
/// callers only ever see `MirrorError::InvalidSignature`.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub(crate) enum SignatureError {
    /// Wrong length or scalar out of range.
    #[error("invalid signature format")]
    InvalidFormat,

    /// High S value (EIP-2).
    #[error("malleable signature (high S value)")]
    MalleableSignature,

    /// v must be 0, 1, 27 or 28.
    #[error("invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    /// Key recovery failed.
    #[error("failed to recover public key")]
    RecoveryFailed,
}
