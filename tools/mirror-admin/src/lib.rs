//! # Mirror Admin
//!
//! Offline operator commands: compute the exact hashes an oracle signs,
//! fold sibling paths, convert public keys and check attestations against a
//! signer before submitting them.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mirror_core::{
    admin_operation_hash, change_signer_hash, combined_leaf, convert_pub_key_to_address,
    fold_sorted_path, root_leaf, state_leaf, AttestationProof, AuthoritySigner,
    MerkleAttestationVerifier, OperationTag, RootFields, StateFields,
};
use shared_types::{parse_address, parse_hash, parse_hex, parse_u256, to_hex, Address, Hash, U256};
use tracing::debug;

/// Mirror Admin: state mirror operator tool
#[derive(Parser, Debug)]
#[command(name = "mirror-admin")]
#[command(about = "Offline encodings and checks for the authenticated state mirror")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate a raw 64-byte public key and print its address
    PubkeyAddress {
        /// Hex `x ‖ y`
        #[arg(long)]
        key: String,
    },

    /// Leaf hash of a state transition
    StateLeaf {
        #[arg(long, value_parser = address_arg)]
        source: Address,
        #[arg(long, value_parser = u256_arg)]
        identity: U256,
        #[arg(long, value_parser = u256_arg)]
        state: U256,
        #[arg(long, value_parser = u256_arg)]
        timestamp: U256,
        #[arg(long, value_parser = u256_arg)]
        block: U256,
        #[arg(long, value_parser = u256_arg, default_value = "0")]
        prev: U256,
    },

    /// Leaf hash of a GIST root transition
    RootLeaf {
        #[arg(long, value_parser = address_arg)]
        source: Address,
        #[arg(long, value_parser = u256_arg)]
        root: U256,
        #[arg(long, value_parser = u256_arg)]
        timestamp: U256,
        #[arg(long, value_parser = u256_arg)]
        block: U256,
        #[arg(long, value_parser = u256_arg, default_value = "0")]
        prev: U256,
    },

    /// Leaf hash of a combined state and root transition
    CombinedLeaf {
        #[arg(long, value_parser = address_arg)]
        source: Address,
        #[arg(long, value_parser = u256_arg)]
        identity: U256,
        #[arg(long, value_parser = u256_arg)]
        state: U256,
        #[arg(long, value_parser = u256_arg)]
        state_timestamp: U256,
        #[arg(long, value_parser = u256_arg)]
        state_block: U256,
        #[arg(long, value_parser = u256_arg)]
        root: U256,
        #[arg(long, value_parser = u256_arg)]
        root_timestamp: U256,
        #[arg(long, value_parser = u256_arg)]
        root_block: U256,
        #[arg(long, value_parser = u256_arg, default_value = "0")]
        prev_state: U256,
        #[arg(long, value_parser = u256_arg, default_value = "0")]
        prev_root: U256,
    },

    /// Fold a leaf through a sibling path (leaf→root order)
    FoldPath {
        #[arg(long, value_parser = hash_arg)]
        leaf: Hash,
        #[arg(long = "sibling", value_parser = hash_arg)]
        siblings: Vec<Hash>,
    },

    /// Hash an authorized administrative change signs over
    AdminHash {
        #[arg(long, value_enum)]
        operation: AdminOperation,
        #[arg(long, value_parser = address_arg)]
        target: Address,
        #[arg(long, default_value = "ethereum")]
        chain_name: String,
        #[arg(long, value_parser = u256_arg)]
        nonce: U256,
        #[arg(long, value_parser = address_arg)]
        self_id: Address,
    },

    /// Hash a signer rotation signs over
    ChangeSignerHash {
        /// Hex `x ‖ y` of the new signer
        #[arg(long)]
        key: String,
    },

    /// Check that a JSON proof attests `leaf` under `signer`
    CheckAttestation {
        #[arg(long, value_parser = address_arg)]
        signer: Address,
        #[arg(long, value_parser = hash_arg)]
        leaf: Hash,
        /// `{"sibling_path": [...], "signature": "..."}`
        #[arg(long)]
        proof: String,
    },
}

/// Nonce-gated administrative operations.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminOperation {
    Upgrade,
    SourceAuthority,
}

impl From<AdminOperation> for OperationTag {
    fn from(operation: AdminOperation) -> Self {
        match operation {
            AdminOperation::Upgrade => OperationTag::AuthorizeUpgrade,
            AdminOperation::SourceAuthority => OperationTag::ChangeSourceAuthority,
        }
    }
}

fn address_arg(input: &str) -> std::result::Result<Address, String> {
    parse_address(input).map_err(|e| e.to_string())
}

fn hash_arg(input: &str) -> std::result::Result<Hash, String> {
    parse_hash(input).map_err(|e| e.to_string())
}

fn u256_arg(input: &str) -> std::result::Result<U256, String> {
    parse_u256(input).map_err(|e| e.to_string())
}

/// Execute one command and return what it prints.
pub fn run(command: Command) -> Result<String> {
    debug!("[mirror-admin] running {:?}", command);
    let output = match command {
        Command::PubkeyAddress { key } => {
            let key = parse_hex(&key).context("public key is not hex")?;
            to_hex(&convert_pub_key_to_address(&key)?)
        }
        Command::StateLeaf {
            source,
            identity,
            state,
            timestamp,
            block,
            prev,
        } => {
            let fields = StateFields {
                identity,
                state,
                created_at_timestamp: timestamp,
                created_at_block: block,
            };
            to_hex(&state_leaf(&source, &prev, &fields))
        }
        Command::RootLeaf {
            source,
            root,
            timestamp,
            block,
            prev,
        } => {
            let fields = RootFields {
                root,
                created_at_timestamp: timestamp,
                created_at_block: block,
            };
            to_hex(&root_leaf(&source, &prev, &fields))
        }
        Command::CombinedLeaf {
            source,
            identity,
            state,
            state_timestamp,
            state_block,
            root,
            root_timestamp,
            root_block,
            prev_state,
            prev_root,
        } => {
            let state = StateFields {
                identity,
                state,
                created_at_timestamp: state_timestamp,
                created_at_block: state_block,
            };
            let root = RootFields {
                root,
                created_at_timestamp: root_timestamp,
                created_at_block: root_block,
            };
            to_hex(&combined_leaf(&source, &prev_state, &prev_root, &state, &root))
        }
        Command::FoldPath { leaf, siblings } => to_hex(&fold_sorted_path(&leaf, &siblings)),
        Command::AdminHash {
            operation,
            target,
            chain_name,
            nonce,
            self_id,
        } => to_hex(&admin_operation_hash(
            operation.into(),
            &target,
            &chain_name,
            &nonce,
            &self_id,
        )),
        Command::ChangeSignerHash { key } => {
            let key = parse_hex(&key).context("public key is not hex")?;
            // Refuse to produce a hash for a key the mirror would reject
            convert_pub_key_to_address(&key)?;
            to_hex(&change_signer_hash(&key))
        }
        Command::CheckAttestation {
            signer,
            leaf,
            proof,
        } => {
            let proof: AttestationProof =
                serde_json::from_str(&proof).context("proof is not valid JSON")?;
            // Attestations do not depend on chain name or self id
            let authority = AuthoritySigner::new(signer, String::new(), [0u8; 20]);
            match MerkleAttestationVerifier::new(&authority).verify_and_extract_root(&leaf, &proof)
            {
                Ok(root) => format!("valid, root {}", to_hex(&root)),
                Err(e) => bail!("attestation rejected: {e}"),
            }
        }
    };
    Ok(output)
}
