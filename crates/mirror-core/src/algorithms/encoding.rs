//! # Leaf and Payload Encodings
//!
//! Byte layouts of everything the authority signs. Values are packed as
//! 32-byte big-endian words; addresses are 20 raw bytes; the chain name is
//! its raw UTF-8 bytes. Any change here breaks every existing attestation.

use crate::domain::entities::{OperationTag, RootFields, StateFields};
use sha3::{Digest, Keccak256};
use shared_types::{u256_to_word, Address, Hash, U256};

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    finalize(hasher)
}

fn finalize(hasher: Keccak256) -> Hash {
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&hasher.finalize());
    hash
}

fn update_words(hasher: &mut Keccak256, words: &[U256]) {
    for word in words {
        hasher.update(u256_to_word(word));
    }
}

/// `keccak256(source ‖ identity ‖ state ‖ createdAtTimestamp ‖ createdAtBlock ‖ prevState)`
pub fn state_leaf(source: &Address, prev_state: &U256, fields: &StateFields) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(source);
    update_words(
        &mut hasher,
        &[
            fields.identity,
            fields.state,
            fields.created_at_timestamp,
            fields.created_at_block,
            *prev_state,
        ],
    );
    finalize(hasher)
}

/// `keccak256(source ‖ root ‖ createdAtTimestamp ‖ createdAtBlock ‖ prevRoot)`
pub fn root_leaf(source: &Address, prev_root: &U256, fields: &RootFields) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(source);
    update_words(
        &mut hasher,
        &[
            fields.root,
            fields.created_at_timestamp,
            fields.created_at_block,
            *prev_root,
        ],
    );
    finalize(hasher)
}

/// `keccak256(source ‖ state words ‖ root words ‖ prevState ‖ prevRoot)`
pub fn combined_leaf(
    source: &Address,
    prev_state: &U256,
    prev_root: &U256,
    state: &StateFields,
    root: &RootFields,
) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(source);
    update_words(
        &mut hasher,
        &[
            state.identity,
            state.state,
            state.created_at_timestamp,
            state.created_at_block,
            root.root,
            root.created_at_timestamp,
            root.created_at_block,
            *prev_state,
            *prev_root,
        ],
    );
    finalize(hasher)
}

/// `keccak256(tag ‖ target ‖ chainName ‖ nonce ‖ selfId)`
pub fn admin_operation_hash(
    tag: OperationTag,
    target: &Address,
    chain_name: &str,
    nonce: &U256,
    self_id: &Address,
) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update([tag.as_byte()]);
    hasher.update(target);
    hasher.update(chain_name.as_bytes());
    hasher.update(u256_to_word(nonce));
    hasher.update(self_id);
    finalize(hasher)
}

/// `keccak256(0x02 ‖ publicKey)`
pub fn change_signer_hash(public_key: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update([OperationTag::ChangeSigner.as_byte()]);
    hasher.update(public_key);
    finalize(hasher)
}
