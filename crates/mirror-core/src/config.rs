//! Mirror configuration from environment variables.

use crate::domain::MirrorError;
use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};
use shared_types::{is_zero_address, parse_address, Address, ZERO_ADDRESS};
use std::env;

/// Construction parameters of a `MirrorCoordinator`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Initial authorized signer
    #[serde_as(as = "Hex")]
    pub signer: Address,

    /// Registry in the source domain whose data is mirrored
    #[serde_as(as = "Hex")]
    pub source_registry: Address,

    /// Name of the target chain, bound into administrative signatures
    pub chain_name: String,

    /// This mirror's own identifier, bound into administrative signatures
    #[serde_as(as = "Hex")]
    pub self_id: Address,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            signer: ZERO_ADDRESS,
            source_registry: ZERO_ADDRESS,
            chain_name: "ethereum".to_string(),
            self_id: ZERO_ADDRESS,
        }
    }
}

impl MirrorConfig {
    /// A valid configuration around `signer`, with fixed non-zero
    /// placeholders for everything else.
    pub fn for_testing(signer: Address) -> Self {
        Self {
            signer,
            source_registry: [0x11; 20],
            chain_name: "ethereum".to_string(),
            self_id: [0x22; 20],
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MIRROR_SIGNER`: initial signer address (required)
    /// - `MIRROR_SOURCE_REGISTRY`: source registry address (required)
    /// - `MIRROR_CHAIN_NAME`: chain name (default: ethereum)
    /// - `MIRROR_SELF_ID`: own identifier (required)
    pub fn from_env() -> Result<Self, MirrorError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// `from_env` over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MirrorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let address = |name: &str| -> Result<Address, MirrorError> {
            let raw = lookup(name)
                .ok_or_else(|| MirrorError::InvalidConfig(format!("{name} is not set")))?;
            parse_address(&raw).map_err(|e| MirrorError::InvalidConfig(format!("{name}: {e}")))
        };

        let config = Self {
            signer: address("MIRROR_SIGNER")?,
            source_registry: address("MIRROR_SOURCE_REGISTRY")?,
            chain_name: lookup("MIRROR_CHAIN_NAME").unwrap_or_else(|| "ethereum".to_string()),
            self_id: address("MIRROR_SELF_ID")?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject zero addresses and an empty chain name.
    pub fn validate(&self) -> Result<(), MirrorError> {
        for (name, address) in [
            ("signer", &self.signer),
            ("source registry", &self.source_registry),
            ("self id", &self.self_id),
        ] {
            if is_zero_address(address) {
                return Err(MirrorError::InvalidConfig(format!("{name} is the zero address")));
            }
        }
        if self.chain_name.is_empty() {
            return Err(MirrorError::InvalidConfig("chain name is empty".to_string()));
        }
        Ok(())
    }
}
