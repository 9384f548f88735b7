//! # Mirror Core
//!
//! Authenticated state mirror: a trust-minimized, append-only copy of an
//! identity registry that lives in a domain the consumer cannot observe.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Accept identity states and GIST roots only when they are:
//! - Included in a sorted-pair Merkle tree
//! - Under a root signed by the single authorized oracle signer
//!
//! and keep them as forward-linked chains with a head per identity plus one
//! global head for roots.
//!
//! ## Security Features
//!
//! | Defense | Description |
//! |---------|-------------|
//! | Signed attestations | secp256k1 recovery against the current signer |
//! | EIP-2 | High-S signatures never verify |
//! | Replay nonces | Per-operation nonces on administrative changes |
//! | Domain binding | Chain name and own identifier inside admin hashes |
//! | Write-once records | A stored key can never be written again |
//! | Key validation | Length, zero-coordinate and on-curve checks before rotation |
//!
//! ## Module Structure
//!
//! ```text
//! mirror-core/
//! ├── domain/          # Records, errors, AuthoritySigner, ledgers, verifier
//! ├── algorithms/      # keccak encodings, sorted-pair Merkle, ECDSA, key checks
//! ├── ports/           # Query/transit/admin APIs (inbound) + event sink (outbound)
//! ├── adapters/        # Event sinks
//! ├── application/     # MirrorCoordinator, SharedMirror
//! └── config.rs        # MirrorConfig
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_helpers;

// Re-exports
pub use adapters::{NoopEventSink, RecordingEventSink};
pub use algorithms::{
    address_from_verifying_key, admin_operation_hash, build_proof, change_signer_hash,
    combined_leaf, compute_root, fold_sorted_path, hash_sorted_pair, keccak256,
    public_key_to_address, root_leaf, state_leaf, validate_public_key, EcdsaSignature,
    PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH,
};
pub use application::{MirrorCoordinator, SharedMirror};
pub use config::MirrorConfig;
pub use domain::{
    convert_pub_key_to_address, AppendOutcome, AttestationProof, AuthoritySigner,
    MerkleAttestationVerifier, MirrorError, MirrorEvent, OperationTag, PendingLink,
    PublicKeyError, RecordKey, RootChainLedger, RootFields, RootInfo, StateChainLedger,
    StateFields, StateInfo,
};
pub use ports::{MirrorAdminApi, MirrorEventSink, MirrorQueryApi, MirrorTransitApi};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
