//! # State Chain Ledger
//!
//! Per-identity chains of attested states, keyed by `(identity, state)`.

use super::chain::{AppendOutcome, LinkedChain};
use super::entities::{PendingLink, StateFields, StateInfo};
use super::errors::{MirrorError, RecordKey};
use shared_types::U256;
use std::collections::HashMap;

/// Stores one linked chain per identity.
#[derive(Clone, Debug, Default)]
pub struct StateChainLedger {
    chains: HashMap<U256, LinkedChain<StateInfo>>,
}

impl StateChainLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that `fields` could be inserted, without inserting.
    ///
    /// # Errors
    /// - `ZeroTarget` if the state value is zero (the "none" sentinel)
    /// - `DuplicateRecord` if `(identity, state)` is already stored
    pub fn ensure_insertable(&self, fields: &StateFields) -> Result<(), MirrorError> {
        if fields.state.is_zero() {
            return Err(MirrorError::ZeroTarget);
        }
        if self.contains(&fields.identity, &fields.state) {
            return Err(MirrorError::DuplicateRecord(RecordKey::State {
                identity: fields.identity,
                state: fields.state,
            }));
        }
        Ok(())
    }

    /// Store a new state after `prev_state`.
    ///
    /// The new record takes any pending claim on it, otherwise it starts
    /// unlinked. If `(identity, prev_state)` is stored, it is linked to the
    /// new state; if not, the claim is kept pending. The identity's head moves to
    /// the new state on its first write, or when `prev_state` is the head.
    pub fn insert(
        &mut self,
        prev_state: U256,
        fields: &StateFields,
    ) -> Result<AppendOutcome, MirrorError> {
        self.ensure_insertable(fields)?;
        let outcome = self
            .chains
            .entry(fields.identity)
            .or_default()
            .append(prev_state, StateInfo::from_fields(fields));
        Ok(outcome)
    }

    pub fn query(&self, identity: &U256, state: &U256) -> Option<StateInfo> {
        self.chains.get(identity)?.get(state).copied()
    }

    /// Record at the identity's head.
    pub fn query_current(&self, identity: &U256) -> Option<StateInfo> {
        self.chains.get(identity)?.head_record().copied()
    }

    pub fn head_of(&self, identity: &U256) -> Option<U256> {
        self.chains.get(identity)?.head()
    }

    pub fn contains(&self, identity: &U256, state: &U256) -> bool {
        self.chains
            .get(identity)
            .is_some_and(|chain| chain.contains(state))
    }

    /// Whether any state has been stored for the identity.
    pub fn exists(&self, identity: &U256) -> bool {
        self.chains.contains_key(identity)
    }

    /// Successor claimed for a state that is not stored yet.
    pub fn pending_successor(&self, identity: &U256, state: &U256) -> Option<PendingLink> {
        self.chains.get(identity)?.pending(state)
    }

    pub fn identity_count(&self) -> usize {
        self.chains.len()
    }

    pub fn state_count(&self, identity: &U256) -> usize {
        self.chains.get(identity).map_or(0, LinkedChain::len)
    }
}
