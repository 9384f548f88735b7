//! # Linked Chain
//!
//! A key→record arena with a head pointer. Both ledgers are built on it: the
//! root ledger owns one chain, the state ledger owns one chain per identity.
//!
//! ## Rules
//!
//! - A key is written once. Callers check `contains` before `append`.
//! - Appending mutates at most one other record: the named predecessor.
//! - A successor naming a missing predecessor leaves a pending link, applied
//!   to the predecessor when it is stored.
//! - The first append always sets the head. Later appends move the head
//!   only when their predecessor is the current head (backfills never do).

use super::entities::{PendingLink, RootInfo, StateInfo};
use shared_types::U256;
use std::collections::HashMap;

/// A record that can sit in a linked chain.
pub(crate) trait ChainRecord {
    /// The record's key within its chain.
    fn key(&self) -> U256;

    fn created_at_timestamp(&self) -> U256;

    fn created_at_block(&self) -> U256;

    /// Point this record at its successor.
    fn link_successor(&mut self, link: &PendingLink);
}

impl ChainRecord for StateInfo {
    fn key(&self) -> U256 {
        self.state
    }

    fn created_at_timestamp(&self) -> U256 {
        self.created_at_timestamp
    }

    fn created_at_block(&self) -> U256 {
        self.created_at_block
    }

    fn link_successor(&mut self, link: &PendingLink) {
        self.replaced_by_state = link.successor;
        self.replaced_at_timestamp = link.replaced_at_timestamp;
        self.replaced_at_block = link.replaced_at_block;
    }
}

impl ChainRecord for RootInfo {
    fn key(&self) -> U256 {
        self.root
    }

    fn created_at_timestamp(&self) -> U256 {
        self.created_at_timestamp
    }

    fn created_at_block(&self) -> U256 {
        self.created_at_block
    }

    fn link_successor(&mut self, link: &PendingLink) {
        self.replaced_by_root = link.successor;
        self.replaced_at_timestamp = link.replaced_at_timestamp;
        self.replaced_at_block = link.replaced_at_block;
    }
}

/// What an append did besides storing the record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AppendOutcome {
    /// The predecessor was stored and now points at the new record.
    pub linked_predecessor: bool,
    /// A successor stored earlier had named the new record, which now
    /// points at it.
    pub linked_successor: bool,
    /// The head now points at the new record.
    pub head_moved: bool,
}

#[derive(Clone, Debug)]
pub(crate) struct LinkedChain<R> {
    records: HashMap<U256, R>,
    head: Option<U256>,
    pending: HashMap<U256, PendingLink>,
}

impl<R> Default for LinkedChain<R> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
            head: None,
            pending: HashMap::new(),
        }
    }
}

impl<R: ChainRecord> LinkedChain<R> {
    pub(crate) fn contains(&self, key: &U256) -> bool {
        self.records.contains_key(key)
    }

    pub(crate) fn get(&self, key: &U256) -> Option<&R> {
        self.records.get(key)
    }

    pub(crate) fn head(&self) -> Option<U256> {
        self.head
    }

    pub(crate) fn head_record(&self) -> Option<&R> {
        self.head.and_then(|head| self.records.get(&head))
    }

    pub(crate) fn pending(&self, key: &U256) -> Option<PendingLink> {
        self.pending.get(key).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    /// Store `record` after `prev`. The caller guarantees the key is new.
    pub(crate) fn append(&mut self, prev: U256, mut record: R) -> AppendOutcome {
        let key = record.key();
        debug_assert!(!self.contains(&key), "append over an existing key");

        let link = PendingLink {
            successor: key,
            replaced_at_timestamp: record.created_at_timestamp(),
            replaced_at_block: record.created_at_block(),
        };

        let mut outcome = AppendOutcome::default();

        // A successor that arrived first already named this record
        if let Some(claim) = self.pending.remove(&key) {
            record.link_successor(&claim);
            outcome.linked_successor = true;
        }
        self.records.insert(key, record);

        // A record never replaces itself
        if prev != key {
            if let Some(predecessor) = self.records.get_mut(&prev) {
                predecessor.link_successor(&link);
                outcome.linked_predecessor = true;
            } else if !prev.is_zero() {
                self.pending.insert(prev, link);
            }
        }

        match self.head {
            None => {
                self.head = Some(key);
                outcome.head_moved = true;
            }
            Some(head) if head == prev => {
                self.head = Some(key);
                outcome.head_moved = true;
            }
            Some(_) => {}
        }

        outcome
    }
}
