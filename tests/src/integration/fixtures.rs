//! Oracle + mirror harness shared by the integration flows.

use mirror_core::test_helpers::AttestationSigner;
use mirror_core::{
    combined_leaf, root_leaf, state_leaf, AttestationProof, MirrorConfig, MirrorCoordinator,
    MirrorError, MirrorTransitApi, RecordingEventSink, RootFields, StateFields,
};
use shared_types::U256;
use std::sync::Arc;

pub const CHAIN_NAME: &str = "ethereum";
pub const SELF_ID: [u8; 20] = [0x22; 20];
pub const SOURCE_REGISTRY: [u8; 20] = [0x11; 20];

pub fn u(value: u64) -> U256 {
    U256::from(value)
}

/// Fields of a state created at `timestamp`, block `timestamp / 10`.
pub fn state_fields(identity: u64, state: u64, timestamp: u64) -> StateFields {
    StateFields {
        identity: u(identity),
        state: u(state),
        created_at_timestamp: u(timestamp),
        created_at_block: u(timestamp / 10),
    }
}

pub fn root_fields(root: u64, timestamp: u64) -> RootFields {
    RootFields {
        root: u(root),
        created_at_timestamp: u(timestamp),
        created_at_block: u(timestamp / 10),
    }
}

/// A fresh oracle key for the test mirror's chain name and identifier.
pub fn new_oracle() -> AttestationSigner {
    AttestationSigner::random(CHAIN_NAME, SELF_ID)
}

pub struct MirrorHarness {
    pub oracle: AttestationSigner,
    pub mirror: MirrorCoordinator<Arc<RecordingEventSink>>,
    pub events: Arc<RecordingEventSink>,
}

impl MirrorHarness {
    pub fn new() -> Self {
        let oracle = new_oracle();
        let config = MirrorConfig {
            signer: oracle.address(),
            source_registry: SOURCE_REGISTRY,
            chain_name: CHAIN_NAME.to_string(),
            self_id: SELF_ID,
        };
        let events = Arc::new(RecordingEventSink::new());
        let mirror = MirrorCoordinator::with_event_sink(config, Arc::clone(&events))
            .expect("valid test config");
        Self {
            oracle,
            mirror,
            events,
        }
    }

    pub fn attest_state(&mut self, prev: u64, fields: &StateFields) -> AttestationProof {
        let leaf = state_leaf(&self.mirror.source_registry(), &u(prev), fields);
        self.oracle.attest(&leaf)
    }

    pub fn attest_root(&mut self, prev: u64, fields: &RootFields) -> AttestationProof {
        let leaf = root_leaf(&self.mirror.source_registry(), &u(prev), fields);
        self.oracle.attest(&leaf)
    }

    pub fn attest_combined(
        &mut self,
        prev_state: u64,
        prev_root: u64,
        state: &StateFields,
        root: &RootFields,
    ) -> AttestationProof {
        let leaf = combined_leaf(
            &self.mirror.source_registry(),
            &u(prev_state),
            &u(prev_root),
            state,
            root,
        );
        self.oracle.attest(&leaf)
    }

    pub fn transit_state(&mut self, prev: u64, fields: StateFields) -> Result<(), MirrorError> {
        let proof = self.attest_state(prev, &fields);
        self.mirror.transit_state_record(u(prev), fields, &proof)
    }

    pub fn transit_root(&mut self, prev: u64, fields: RootFields) -> Result<(), MirrorError> {
        let proof = self.attest_root(prev, &fields);
        self.mirror.transit_root_record(u(prev), fields, &proof)
    }

    pub fn transit_combined(
        &mut self,
        prev_state: u64,
        prev_root: u64,
        state: StateFields,
        root: RootFields,
    ) -> Result<(), MirrorError> {
        let proof = self.attest_combined(prev_state, prev_root, &state, &root);
        self.mirror
            .transit_combined(u(prev_state), u(prev_root), state, root, &proof)
    }
}

impl Default for MirrorHarness {
    fn default() -> Self {
        Self::new()
    }
}
