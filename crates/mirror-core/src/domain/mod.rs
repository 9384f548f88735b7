//! # Domain Layer
//!
//! Records, errors, the signer state and the two ledgers. No I/O.

pub mod attestation;
pub mod authority;
pub(crate) mod chain;
pub mod entities;
pub mod errors;
pub mod root_chain;
pub mod state_chain;

pub use attestation::MerkleAttestationVerifier;
pub use authority::{convert_pub_key_to_address, AuthoritySigner};
pub use chain::AppendOutcome;
pub use entities::*;
pub use errors::{MirrorError, PublicKeyError, RecordKey};
pub use root_chain::RootChainLedger;
pub use state_chain::StateChainLedger;
