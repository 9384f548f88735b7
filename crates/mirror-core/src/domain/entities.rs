//! # Domain Entities
//!
//! Records, transition payloads and attestation proofs.
//!
//! Every numeric field is a 256-bit word. Zero is the "none" sentinel: a
//! `replaced_by_*` of zero means "not replaced yet" and a predecessor of zero
//! means "no predecessor".

use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};
use shared_types::{Address, Hash, U256};

// =============================================================================
// Transition Payloads
// =============================================================================

/// Fields of a new identity state, as attested by the source domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateFields {
    /// Identity the state belongs to.
    pub identity: U256,
    /// The new state value.
    pub state: U256,
    /// Source-domain timestamp of the state.
    pub created_at_timestamp: U256,
    /// Source-domain block of the state.
    pub created_at_block: U256,
}

/// Fields of a new GIST root, as attested by the source domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootFields {
    /// The new root value.
    pub root: U256,
    /// Source-domain timestamp of the root.
    pub created_at_timestamp: U256,
    /// Source-domain block of the root.
    pub created_at_block: U256,
}

// =============================================================================
// Stored Records
// =============================================================================

/// A stored identity state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateInfo {
    pub identity: U256,
    pub state: U256,
    /// State that replaced this one, zero until linked.
    pub replaced_by_state: U256,
    pub created_at_timestamp: U256,
    pub replaced_at_timestamp: U256,
    pub created_at_block: U256,
    pub replaced_at_block: U256,
}

impl StateInfo {
    /// A fresh, unlinked record.
    pub fn from_fields(fields: &StateFields) -> Self {
        Self {
            identity: fields.identity,
            state: fields.state,
            replaced_by_state: U256::zero(),
            created_at_timestamp: fields.created_at_timestamp,
            replaced_at_timestamp: U256::zero(),
            created_at_block: fields.created_at_block,
            replaced_at_block: U256::zero(),
        }
    }

    /// Whether a successor has been linked.
    pub fn is_replaced(&self) -> bool {
        !self.replaced_by_state.is_zero()
    }
}

/// A stored GIST root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootInfo {
    pub root: U256,
    /// Root that replaced this one, zero until linked.
    pub replaced_by_root: U256,
    pub created_at_timestamp: U256,
    pub replaced_at_timestamp: U256,
    pub created_at_block: U256,
    pub replaced_at_block: U256,
}

impl RootInfo {
    /// A fresh, unlinked record.
    pub fn from_fields(fields: &RootFields) -> Self {
        Self {
            root: fields.root,
            replaced_by_root: U256::zero(),
            created_at_timestamp: fields.created_at_timestamp,
            replaced_at_timestamp: U256::zero(),
            created_at_block: fields.created_at_block,
            replaced_at_block: U256::zero(),
        }
    }

    /// Whether a successor has been linked.
    pub fn is_replaced(&self) -> bool {
        !self.replaced_by_root.is_zero()
    }
}

/// A successor reference to a record that has not been stored yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingLink {
    pub successor: U256,
    pub replaced_at_timestamp: U256,
    pub replaced_at_block: U256,
}

// =============================================================================
// Attestation
// =============================================================================

/// Merkle path plus the authority's signature over the reconstructed root.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestationProof {
    /// Sibling hashes in leaf→root order. Position is not encoded: pairs are
    /// hashed in sorted order.
    #[serde_as(as = "Vec<Hex>")]
    pub sibling_path: Vec<Hash>,
    /// 65-byte recoverable signature `r ‖ s ‖ v`.
    #[serde_as(as = "Hex")]
    pub signature: Vec<u8>,
}

impl AttestationProof {
    pub fn new(sibling_path: Vec<Hash>, signature: Vec<u8>) -> Self {
        Self {
            sibling_path,
            signature,
        }
    }
}

/// Administrative operations, each with its own nonce.
///
/// `as_byte` gives the tag that leads the signed hash. `ChangeSigner` shares
/// byte 2 with `ChangeSourceAuthority`; its preimage length differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OperationTag {
    AuthorizeUpgrade,
    ChangeSourceAuthority,
    ChangeSigner,
}

impl OperationTag {
    pub const ALL: [OperationTag; 3] = [
        OperationTag::AuthorizeUpgrade,
        OperationTag::ChangeSourceAuthority,
        OperationTag::ChangeSigner,
    ];

    pub fn as_byte(self) -> u8 {
        match self {
            OperationTag::AuthorizeUpgrade => 1,
            OperationTag::ChangeSourceAuthority | OperationTag::ChangeSigner => 2,
        }
    }
}

// =============================================================================
// Events
// =============================================================================

/// Published after every committed operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MirrorEvent {
    /// An identity state was accepted.
    StateTransited {
        identity: U256,
        state: U256,
        prev_state: U256,
    },
    /// A GIST root was accepted.
    RootTransited { root: U256, prev_root: U256 },
    /// The authorized signer was rotated.
    SignerChanged {
        previous: Address,
        current: Address,
    },
    /// The source registry whose data is mirrored was changed.
    SourceAuthorityChanged {
        previous: Address,
        current: Address,
    },
    /// A new implementation was authorized.
    UpgradeAuthorized { implementation: Address },
}
