//! # Algorithms
//!
//! Pure functions: hashing, leaf encodings, sorted-pair Merkle trees, ECDSA
//! recovery and public key validation.

pub mod ecdsa;
pub mod encoding;
pub mod merkle;
pub mod public_key;

pub use ecdsa::{address_from_verifying_key, EcdsaSignature, SIGNATURE_LENGTH};
pub use encoding::{
    admin_operation_hash, change_signer_hash, combined_leaf, keccak256, root_leaf, state_leaf,
};
pub use merkle::{build_proof, compute_root, fold_sorted_path, hash_sorted_pair};
pub use public_key::{public_key_to_address, validate_public_key, PUBLIC_KEY_LENGTH};
