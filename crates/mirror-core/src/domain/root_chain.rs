//! # Root Chain Ledger
//!
//! The single global chain of GIST roots.

use super::chain::{AppendOutcome, LinkedChain};
use super::entities::{PendingLink, RootFields, RootInfo};
use super::errors::{MirrorError, RecordKey};
use shared_types::U256;

#[derive(Clone, Debug, Default)]
pub struct RootChainLedger {
    chain: LinkedChain<RootInfo>,
}

impl RootChainLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that `fields` could be inserted, without inserting.
    pub fn ensure_insertable(&self, fields: &RootFields) -> Result<(), MirrorError> {
        if fields.root.is_zero() {
            return Err(MirrorError::ZeroTarget);
        }
        if self.chain.contains(&fields.root) {
            return Err(MirrorError::DuplicateRecord(RecordKey::Root(fields.root)));
        }
        Ok(())
    }

    /// Store a new root after `prev_root`. Same linking and head rules as
    /// the state ledger, over one global chain.
    pub fn insert(
        &mut self,
        prev_root: U256,
        fields: &RootFields,
    ) -> Result<AppendOutcome, MirrorError> {
        self.ensure_insertable(fields)?;
        Ok(self.chain.append(prev_root, RootInfo::from_fields(fields)))
    }

    pub fn query(&self, root: &U256) -> Option<RootInfo> {
        self.chain.get(root).copied()
    }

    pub fn query_current(&self) -> Option<RootInfo> {
        self.chain.head_record().copied()
    }

    pub fn head(&self) -> Option<U256> {
        self.chain.head()
    }

    pub fn contains(&self, root: &U256) -> bool {
        self.chain.contains(root)
    }

    pub fn pending_successor(&self, root: &U256) -> Option<PendingLink> {
        self.chain.pending(root)
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.len() == 0
    }
}
