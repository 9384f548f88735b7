//! # Inbound Ports
//!
//! What callers can do with a mirror: read it, feed it attested records and
//! administer it.

use crate::domain::{AttestationProof, MirrorError, RootFields, RootInfo, StateFields, StateInfo};
use shared_types::{Address, U256};

/// Read-only views. Unknown keys yield `None`.
pub trait MirrorQueryApi: Send + Sync {
    /// Latest accepted state of an identity.
    fn get_state_info_by_id(&self, identity: &U256) -> Option<StateInfo>;

    fn get_state_info_by_id_and_state(&self, identity: &U256, state: &U256) -> Option<StateInfo>;

    /// Latest accepted state value of an identity.
    fn get_identity_last_state(&self, identity: &U256) -> Option<U256>;

    fn identity_exists(&self, identity: &U256) -> bool;

    fn state_exists(&self, identity: &U256, state: &U256) -> bool;

    /// Latest accepted GIST root.
    fn get_current_root(&self) -> Option<U256>;

    fn get_root_info(&self, root: &U256) -> Option<RootInfo>;

    fn get_current_root_info(&self) -> Option<RootInfo>;
}

/// Attested transitions. Each call commits fully or not at all.
pub trait MirrorTransitApi {
    fn transit_state_record(
        &mut self,
        prev_state: U256,
        fields: StateFields,
        proof: &AttestationProof,
    ) -> Result<(), MirrorError>;

    fn transit_root_record(
        &mut self,
        prev_root: U256,
        fields: RootFields,
        proof: &AttestationProof,
    ) -> Result<(), MirrorError>;

    /// A state and a root under one leaf and one proof.
    fn transit_combined(
        &mut self,
        prev_state: U256,
        prev_root: U256,
        state: StateFields,
        root: RootFields,
        proof: &AttestationProof,
    ) -> Result<(), MirrorError>;
}

/// Signature-gated administration.
pub trait MirrorAdminApi {
    /// Rotate the signer to the holder of `public_key` (raw 64-byte `x ‖ y`).
    fn change_signer(&mut self, public_key: &[u8], signature: &[u8]) -> Result<(), MirrorError>;

    fn change_source_authority(
        &mut self,
        new_source: Address,
        signature: &[u8],
        nonce: U256,
    ) -> Result<(), MirrorError>;

    fn authorize_upgrade(
        &mut self,
        new_implementation: Address,
        signature: &[u8],
        nonce: U256,
    ) -> Result<(), MirrorError>;

    /// Unauthenticated upgrade path. Always `UpgradeDisabled`.
    fn upgrade_to(&mut self, new_implementation: Address) -> Result<(), MirrorError>;
}
