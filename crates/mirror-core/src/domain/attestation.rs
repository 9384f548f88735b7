//! # Merkle Attestation Verifier
//!
//! A leaf is accepted when its sibling path folds to a root that the current
//! signer has signed.

use crate::algorithms::merkle::fold_sorted_path;
use crate::domain::authority::AuthoritySigner;
use crate::domain::entities::AttestationProof;
use crate::domain::errors::MirrorError;
use shared_types::{to_hex, Hash};
use tracing::debug;

/// Borrowing verifier over the coordinator's signer state.
pub struct MerkleAttestationVerifier<'a> {
    authority: &'a AuthoritySigner,
}

impl<'a> MerkleAttestationVerifier<'a> {
    pub fn new(authority: &'a AuthoritySigner) -> Self {
        Self { authority }
    }

    /// Fold `leaf` through the proof's path and check the signature over
    /// the resulting root.
    ///
    /// # Errors
    /// `InvalidSignature` if the root is not signed by the current signer.
    pub fn verify_and_extract_root(
        &self,
        leaf: &Hash,
        proof: &AttestationProof,
    ) -> Result<Hash, MirrorError> {
        let root = fold_sorted_path(leaf, &proof.sibling_path);
        debug!(
            "[attestation] leaf {} folded through {} siblings to {}",
            to_hex(leaf),
            proof.sibling_path.len(),
            to_hex(&root)
        );
        self.authority.require_signature(&root, &proof.signature)?;
        Ok(root)
    }
}
