//! # Mirror Coordinator
//!
//! Application service owning the signer state and both ledgers.
//!
//! Every write follows the same order: cheap ledger checks, then the
//! attestation or authorization check, then the commit, then the event.
//! A failure at any step leaves the mirror unchanged.

use crate::algorithms::encoding::{combined_leaf, root_leaf, state_leaf};
use crate::adapters::events::NoopEventSink;
use crate::config::MirrorConfig;
use crate::domain::{
    AttestationProof, AuthoritySigner, MerkleAttestationVerifier, MirrorError, MirrorEvent,
    OperationTag, PendingLink, RootChainLedger, RootFields, RootInfo, StateChainLedger,
    StateFields, StateInfo,
};
use crate::ports::{MirrorAdminApi, MirrorEventSink, MirrorQueryApi, MirrorTransitApi};
use shared_types::{to_hex, Address, U256};
use tracing::{info, warn};

/// The mirror façade: transitions, queries and administration.
pub struct MirrorCoordinator<E: MirrorEventSink = NoopEventSink> {
    /// Signer address and replay nonces.
    authority: AuthoritySigner,
    /// Source registry bound into every leaf.
    source_registry: Address,
    /// Last authorized implementation.
    implementation: Option<Address>,
    states: StateChainLedger,
    roots: RootChainLedger,
    events: E,
}

impl MirrorCoordinator<NoopEventSink> {
    /// Create a mirror that publishes nowhere.
    pub fn new(config: MirrorConfig) -> Result<Self, MirrorError> {
        Self::with_event_sink(config, NoopEventSink)
    }
}

impl<E: MirrorEventSink> MirrorCoordinator<E> {
    /// Create a mirror publishing to `events`.
    pub fn with_event_sink(config: MirrorConfig, events: E) -> Result<Self, MirrorError> {
        config.validate()?;
        info!(
            "[mirror] initialized for chain {} with signer {}",
            config.chain_name,
            to_hex(&config.signer)
        );
        Ok(Self {
            authority: AuthoritySigner::new(config.signer, config.chain_name, config.self_id),
            source_registry: config.source_registry,
            implementation: None,
            states: StateChainLedger::new(),
            roots: RootChainLedger::new(),
            events,
        })
    }

    pub fn signer(&self) -> Address {
        self.authority.signer()
    }

    pub fn source_registry(&self) -> Address {
        self.source_registry
    }

    pub fn chain_name(&self) -> &str {
        self.authority.chain_name()
    }

    pub fn self_identifier(&self) -> Address {
        self.authority.self_id()
    }

    /// Implementation recorded by the last `authorize_upgrade`.
    pub fn implementation(&self) -> Option<Address> {
        self.implementation
    }

    /// Replay nonce for `tag`. For `ChangeSigner` it counts rotations.
    pub fn nonce(&self, tag: OperationTag) -> U256 {
        self.authority.nonce(tag)
    }

    /// Successor claimed for a state of `identity` that is not stored yet.
    pub fn pending_state_successor(&self, identity: &U256, state: &U256) -> Option<PendingLink> {
        self.states.pending_successor(identity, state)
    }

    /// Successor claimed for a root that is not stored yet.
    pub fn pending_root_successor(&self, root: &U256) -> Option<PendingLink> {
        self.roots.pending_successor(root)
    }

    pub fn event_sink(&self) -> &E {
        &self.events
    }

    fn verifier(&self) -> MerkleAttestationVerifier<'_> {
        MerkleAttestationVerifier::new(&self.authority)
    }

    fn commit_state(&mut self, prev_state: U256, fields: &StateFields) -> Result<(), MirrorError> {
        let outcome = self.states.insert(prev_state, fields)?;
        info!(
            "[mirror] state {} of identity {} accepted (prev {}, head moved: {})",
            fields.state, fields.identity, prev_state, outcome.head_moved
        );
        self.events.publish(MirrorEvent::StateTransited {
            identity: fields.identity,
            state: fields.state,
            prev_state,
        });
        Ok(())
    }

    fn commit_root(&mut self, prev_root: U256, fields: &RootFields) -> Result<(), MirrorError> {
        let outcome = self.roots.insert(prev_root, fields)?;
        info!(
            "[mirror] GIST root {} accepted (prev {}, head moved: {})",
            fields.root, prev_root, outcome.head_moved
        );
        self.events.publish(MirrorEvent::RootTransited {
            root: fields.root,
            prev_root,
        });
        Ok(())
    }
}

impl<E: MirrorEventSink> MirrorTransitApi for MirrorCoordinator<E> {
    fn transit_state_record(
        &mut self,
        prev_state: U256,
        fields: StateFields,
        proof: &AttestationProof,
    ) -> Result<(), MirrorError> {
        self.states.ensure_insertable(&fields)?;

        let leaf = state_leaf(&self.source_registry, &prev_state, &fields);
        self.verifier().verify_and_extract_root(&leaf, proof)?;

        self.commit_state(prev_state, &fields)
    }

    fn transit_root_record(
        &mut self,
        prev_root: U256,
        fields: RootFields,
        proof: &AttestationProof,
    ) -> Result<(), MirrorError> {
        self.roots.ensure_insertable(&fields)?;

        let leaf = root_leaf(&self.source_registry, &prev_root, &fields);
        self.verifier().verify_and_extract_root(&leaf, proof)?;

        self.commit_root(prev_root, &fields)
    }

    fn transit_combined(
        &mut self,
        prev_state: U256,
        prev_root: U256,
        state: StateFields,
        root: RootFields,
        proof: &AttestationProof,
    ) -> Result<(), MirrorError> {
        // Both checks run before either insert
        self.states.ensure_insertable(&state)?;
        self.roots.ensure_insertable(&root)?;

        let leaf = combined_leaf(&self.source_registry, &prev_state, &prev_root, &state, &root);
        self.verifier().verify_and_extract_root(&leaf, proof)?;

        self.commit_state(prev_state, &state)?;
        self.commit_root(prev_root, &root)
    }
}

impl<E: MirrorEventSink> MirrorAdminApi for MirrorCoordinator<E> {
    fn change_signer(&mut self, public_key: &[u8], signature: &[u8]) -> Result<(), MirrorError> {
        let previous = self.authority.signer();
        let current = self.authority.rotate_signer(public_key, signature)?;
        self.events
            .publish(MirrorEvent::SignerChanged { previous, current });
        Ok(())
    }

    fn change_source_authority(
        &mut self,
        new_source: Address,
        signature: &[u8],
        nonce: U256,
    ) -> Result<(), MirrorError> {
        self.authority
            .authorize_source_authority_change(&new_source, signature, nonce)?;

        let previous = std::mem::replace(&mut self.source_registry, new_source);
        info!(
            "[mirror] source registry changed {} -> {}",
            to_hex(&previous),
            to_hex(&new_source)
        );
        self.events.publish(MirrorEvent::SourceAuthorityChanged {
            previous,
            current: new_source,
        });
        Ok(())
    }

    fn authorize_upgrade(
        &mut self,
        new_implementation: Address,
        signature: &[u8],
        nonce: U256,
    ) -> Result<(), MirrorError> {
        self.authority
            .authorize_upgrade(&new_implementation, signature, nonce)?;

        self.implementation = Some(new_implementation);
        info!(
            "[mirror] upgrade to {} authorized",
            to_hex(&new_implementation)
        );
        self.events.publish(MirrorEvent::UpgradeAuthorized {
            implementation: new_implementation,
        });
        Ok(())
    }

    fn upgrade_to(&mut self, new_implementation: Address) -> Result<(), MirrorError> {
        warn!(
            "[mirror] refused unauthenticated upgrade to {}",
            to_hex(&new_implementation)
        );
        Err(MirrorError::UpgradeDisabled)
    }
}

impl<E: MirrorEventSink> MirrorQueryApi for MirrorCoordinator<E> {
    fn get_state_info_by_id(&self, identity: &U256) -> Option<StateInfo> {
        self.states.query_current(identity)
    }

    fn get_state_info_by_id_and_state(&self, identity: &U256, state: &U256) -> Option<StateInfo> {
        self.states.query(identity, state)
    }

    fn get_identity_last_state(&self, identity: &U256) -> Option<U256> {
        self.states.head_of(identity)
    }

    fn identity_exists(&self, identity: &U256) -> bool {
        self.states.exists(identity)
    }

    fn state_exists(&self, identity: &U256, state: &U256) -> bool {
        self.states.contains(identity, state)
    }

    fn get_current_root(&self) -> Option<U256> {
        self.roots.head()
    }

    fn get_root_info(&self, root: &U256) -> Option<RootInfo> {
        self.roots.query(root)
    }

    fn get_current_root_info(&self) -> Option<RootInfo> {
        self.roots.query_current()
    }
}
