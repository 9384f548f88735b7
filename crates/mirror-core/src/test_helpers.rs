//! # Test Helpers
//!
//! A real secp256k1 authority for tests: signs attestation roots and
//! administrative payloads exactly as an off-chain oracle would.
//!
//! Enabled for this crate's tests and, through the `test-utils` feature,
//! for downstream test crates.

use crate::algorithms::ecdsa::address_from_verifying_key;
use crate::algorithms::encoding::{admin_operation_hash, change_signer_hash};
use crate::algorithms::merkle::{build_proof, compute_root};
use crate::algorithms::public_key::PUBLIC_KEY_LENGTH;
use crate::domain::entities::{AttestationProof, OperationTag};
use k256::ecdsa::{RecoveryId, SigningKey};
use rand::RngCore;
use shared_types::{Address, Hash, U256};

/// Leaves the oracle's tree starts with, so proofs are never trivial.
const SEED_LEAVES: usize = 10;

/// Sign a 32-byte prehash, returning `r ‖ s ‖ v` with low S and v in {27, 28}.
pub fn sign_prehash(key: &SigningKey, hash: &Hash) -> Vec<u8> {
    let (signature, recovery_id) = key
        .sign_prehash_recoverable(hash)
        .expect("signing failed");

    // Normalize S to low value (EIP-2), flipping the recovery id with it
    let (signature, recovery_id) = match signature.normalize_s() {
        Some(normalized) => (
            normalized,
            RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced()),
        ),
        None => (signature, recovery_id),
    };

    let mut out = signature.to_bytes().to_vec();
    out.push(recovery_id.to_byte() + 27);
    out
}

/// An oracle key plus the Merkle tree of every leaf it has attested.
pub struct AttestationSigner {
    key: SigningKey,
    chain_name: String,
    self_id: Address,
    leaves: Vec<Hash>,
}

impl AttestationSigner {
    /// Fresh random key. `chain_name` and `self_id` must match the mirror
    /// the administrative signatures are meant for.
    pub fn random(chain_name: &str, self_id: Address) -> Self {
        let mut rng = rand::thread_rng();
        let leaves = (0..SEED_LEAVES)
            .map(|_| {
                let mut leaf = [0u8; 32];
                rng.fill_bytes(&mut leaf);
                leaf
            })
            .collect();

        Self {
            key: SigningKey::random(&mut rng),
            chain_name: chain_name.to_string(),
            self_id,
            leaves,
        }
    }

    pub fn address(&self) -> Address {
        address_from_verifying_key(self.key.verifying_key())
    }

    /// Raw `x ‖ y` public key.
    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        let encoded = self.key.verifying_key().to_encoded_point(false);
        let mut out = [0u8; PUBLIC_KEY_LENGTH];
        out.copy_from_slice(&encoded.as_bytes()[1..]);
        out
    }

    pub fn sign_hash(&self, hash: &Hash) -> Vec<u8> {
        sign_prehash(&self.key, hash)
    }

    /// Add `leaf` to the tree and sign the new root.
    pub fn attest(&mut self, leaf: &Hash) -> AttestationProof {
        self.leaves.push(*leaf);
        let index = self.leaves.len() - 1;
        let root = compute_root(&self.leaves);
        let sibling_path = build_proof(&self.leaves, index).expect("leaf was just pushed");
        AttestationProof::new(sibling_path, self.sign_hash(&root))
    }

    pub fn sign_change_signer(&self, public_key: &[u8]) -> Vec<u8> {
        self.sign_hash(&change_signer_hash(public_key))
    }

    pub fn sign_authorize_upgrade(&self, implementation: &Address, nonce: U256) -> Vec<u8> {
        self.sign_admin(OperationTag::AuthorizeUpgrade, implementation, nonce)
    }

    pub fn sign_change_source_authority(&self, source: &Address, nonce: U256) -> Vec<u8> {
        self.sign_admin(OperationTag::ChangeSourceAuthority, source, nonce)
    }

    fn sign_admin(&self, tag: OperationTag, target: &Address, nonce: U256) -> Vec<u8> {
        let hash = admin_operation_hash(tag, target, &self.chain_name, &nonce, &self.self_id);
        self.sign_hash(&hash)
    }
}
