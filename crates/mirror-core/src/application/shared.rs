//! # Shared Mirror
//!
//! A cloneable handle around one coordinator. Readers share a consistent
//! snapshot between writes; writes still go one at a time.

use super::service::MirrorCoordinator;
use crate::adapters::events::NoopEventSink;
use crate::domain::{RootInfo, StateInfo};
use crate::ports::{MirrorEventSink, MirrorQueryApi};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use shared_types::U256;
use std::sync::Arc;

pub struct SharedMirror<E: MirrorEventSink = NoopEventSink> {
    inner: Arc<RwLock<MirrorCoordinator<E>>>,
}

impl<E: MirrorEventSink> Clone for SharedMirror<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: MirrorEventSink> SharedMirror<E> {
    pub fn new(mirror: MirrorCoordinator<E>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(mirror)),
        }
    }

    /// Shared access for several queries against one snapshot.
    pub fn read(&self) -> RwLockReadGuard<'_, MirrorCoordinator<E>> {
        self.inner.read()
    }

    /// Exclusive access for transitions and administration.
    pub fn write(&self) -> RwLockWriteGuard<'_, MirrorCoordinator<E>> {
        self.inner.write()
    }
}

impl<E: MirrorEventSink> MirrorQueryApi for SharedMirror<E> {
    fn get_state_info_by_id(&self, identity: &U256) -> Option<StateInfo> {
        self.read().get_state_info_by_id(identity)
    }

    fn get_state_info_by_id_and_state(&self, identity: &U256, state: &U256) -> Option<StateInfo> {
        self.read().get_state_info_by_id_and_state(identity, state)
    }

    fn get_identity_last_state(&self, identity: &U256) -> Option<U256> {
        self.read().get_identity_last_state(identity)
    }

    fn identity_exists(&self, identity: &U256) -> bool {
        self.read().identity_exists(identity)
    }

    fn state_exists(&self, identity: &U256, state: &U256) -> bool {
        self.read().state_exists(identity, state)
    }

    fn get_current_root(&self) -> Option<U256> {
        self.read().get_current_root()
    }

    fn get_root_info(&self, root: &U256) -> Option<RootInfo> {
        self.read().get_root_info(root)
    }

    fn get_current_root_info(&self) -> Option<RootInfo> {
        self.read().get_current_root_info()
    }
}
