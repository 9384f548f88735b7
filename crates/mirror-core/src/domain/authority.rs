//! # Authority Signer
//!
//! Owns the authorized signer address and the per-operation replay nonces.
//! Every attestation and every administrative change is gated here.
//!
//! ## Administrative messages
//!
//! | Operation (tag)             | Signed hash                                         |
//! |-----------------------------|-----------------------------------------------------|
//! | `ChangeSigner` (2)          | `keccak256(tag ‖ publicKey)`                        |
//! | `AuthorizeUpgrade` (1)      | `keccak256(tag ‖ target ‖ chainName ‖ nonce ‖ self)` |
//! | `ChangeSourceAuthority` (2) | `keccak256(tag ‖ target ‖ chainName ‖ nonce ‖ self)` |

use crate::algorithms::ecdsa::recover_signer;
use crate::algorithms::encoding::{admin_operation_hash, change_signer_hash};
use crate::algorithms::public_key::public_key_to_address;
use crate::domain::entities::OperationTag;
use crate::domain::errors::MirrorError;
use shared_types::{is_zero_address, to_hex, Address, Hash, U256};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// The current signer plus replay nonces.
#[derive(Clone, Debug)]
pub struct AuthoritySigner {
    signer: Address,
    chain_name: String,
    self_id: Address,
    nonces: BTreeMap<OperationTag, U256>,
}

impl AuthoritySigner {
    /// Create a signer state with every nonce at zero.
    pub fn new(signer: Address, chain_name: impl Into<String>, self_id: Address) -> Self {
        let nonces = OperationTag::ALL
            .into_iter()
            .map(|tag| (tag, U256::zero()))
            .collect();
        Self {
            signer,
            chain_name: chain_name.into(),
            self_id,
            nonces,
        }
    }

    pub fn signer(&self) -> Address {
        self.signer
    }

    pub fn chain_name(&self) -> &str {
        &self.chain_name
    }

    pub fn self_id(&self) -> Address {
        self.self_id
    }

    /// Current nonce for `tag`.
    ///
    /// For `ChangeSigner` this is the number of successful rotations; rotation
    /// takes no caller nonce, so the value is informational only.
    pub fn nonce(&self, tag: OperationTag) -> U256 {
        self.nonces.get(&tag).copied().unwrap_or_default()
    }

    /// Whether `signature` over `payload_hash` recovers to the current signer.
    pub fn verify(&self, payload_hash: &Hash, signature: &[u8]) -> bool {
        match recover_signer(payload_hash, signature) {
            Ok(recovered) => recovered == self.signer,
            Err(e) => {
                debug!("[authority] signature rejected before recovery: {}", e);
                false
            }
        }
    }

    /// `verify`, as a `Result`.
    pub fn require_signature(&self, payload_hash: &Hash, signature: &[u8]) -> Result<(), MirrorError> {
        if self.verify(payload_hash, signature) {
            return Ok(());
        }
        warn!(
            "[authority] signature does not match signer {}",
            to_hex(&self.signer)
        );
        Err(MirrorError::InvalidSignature)
    }

    /// Replace the signer with the holder of `public_key`.
    ///
    /// The key is validated before the signature is checked. Returns the
    /// new signer address.
    pub fn rotate_signer(
        &mut self,
        public_key: &[u8],
        signature: &[u8],
    ) -> Result<Address, MirrorError> {
        let new_signer = public_key_to_address(public_key)?;
        self.require_signature(&change_signer_hash(public_key), signature)?;

        let previous = std::mem::replace(&mut self.signer, new_signer);
        self.bump(OperationTag::ChangeSigner);
        info!(
            "[authority] signer rotated {} -> {}",
            to_hex(&previous),
            to_hex(&new_signer)
        );
        Ok(new_signer)
    }

    /// Authorize `new_implementation` as the upgrade target.
    pub fn authorize_upgrade(
        &mut self,
        new_implementation: &Address,
        signature: &[u8],
        expected_nonce: U256,
    ) -> Result<(), MirrorError> {
        self.authorize(
            OperationTag::AuthorizeUpgrade,
            new_implementation,
            signature,
            expected_nonce,
        )
    }

    /// Authorize switching the mirrored source registry to `new_source`.
    pub fn authorize_source_authority_change(
        &mut self,
        new_source: &Address,
        signature: &[u8],
        expected_nonce: U256,
    ) -> Result<(), MirrorError> {
        self.authorize(
            OperationTag::ChangeSourceAuthority,
            new_source,
            signature,
            expected_nonce,
        )
    }

    fn authorize(
        &mut self,
        tag: OperationTag,
        target: &Address,
        signature: &[u8],
        expected_nonce: U256,
    ) -> Result<(), MirrorError> {
        if is_zero_address(target) {
            return Err(MirrorError::ZeroTarget);
        }

        let hash = admin_operation_hash(
            tag,
            target,
            &self.chain_name,
            &expected_nonce,
            &self.self_id,
        );
        self.require_signature(&hash, signature)?;

        let current = self.nonce(tag);
        if expected_nonce != current {
            warn!(
                "[authority] {:?} signed for nonce {}, current is {}",
                tag, expected_nonce, current
            );
            return Err(MirrorError::InvalidSignature);
        }

        self.bump(tag);
        Ok(())
    }

    fn bump(&mut self, tag: OperationTag) {
        let nonce = self.nonces.entry(tag).or_default();
        *nonce = nonce.saturating_add(U256::one());
    }
}

/// Validate a raw 64-byte public key and derive its address.
pub fn convert_pub_key_to_address(public_key: &[u8]) -> Result<Address, MirrorError> {
    Ok(public_key_to_address(public_key)?)
}
