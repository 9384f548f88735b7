//! # Transition Flows
//!
//! State, root and combined transitions through `MirrorCoordinator`.

use super::fixtures::{root_fields, state_fields, u, MirrorHarness};
use mirror_core::{
    AttestationProof, MirrorError, MirrorEvent, MirrorQueryApi, MirrorTransitApi, RecordKey,
};
use proptest::prelude::*;

// =============================================================================
// STATE TRANSITIONS
// =============================================================================

#[test]
fn test_sequential_state_transitions() {
    let mut h = MirrorHarness::new();

    h.transit_state(0, state_fields(1, 111, 1000)).unwrap();
    h.transit_state(111, state_fields(1, 222, 1200)).unwrap();
    h.transit_state(222, state_fields(1, 333, 1300)).unwrap();

    assert_eq!(h.mirror.get_identity_last_state(&u(1)), Some(u(333)));

    let first = h.mirror.get_state_info_by_id_and_state(&u(1), &u(111)).unwrap();
    assert_eq!(first.replaced_by_state, u(222));
    assert_eq!(first.replaced_at_timestamp, u(1200));
    assert_eq!(first.replaced_at_block, u(120));

    let second = h.mirror.get_state_info_by_id_and_state(&u(1), &u(222)).unwrap();
    assert_eq!(second.replaced_by_state, u(333));

    let current = h.mirror.get_state_info_by_id(&u(1)).unwrap();
    assert_eq!(current.state, u(333));
    assert!(!current.is_replaced());
}

#[test]
fn test_out_of_order_state_transitions() {
    let mut h = MirrorHarness::new();

    h.transit_state(222, state_fields(1, 333, 1300)).unwrap();
    assert_eq!(h.mirror.get_identity_last_state(&u(1)), Some(u(333)));

    h.transit_state(0, state_fields(1, 111, 1000)).unwrap();
    assert_eq!(h.mirror.get_identity_last_state(&u(1)), Some(u(333)));

    h.transit_state(111, state_fields(1, 222, 1200)).unwrap();
    assert_eq!(h.mirror.get_identity_last_state(&u(1)), Some(u(333)));

    // 111 was linked when 222 arrived
    let first = h.mirror.get_state_info_by_id_and_state(&u(1), &u(111)).unwrap();
    assert_eq!(first.replaced_by_state, u(222));

    // 333 named 222 before 222 existed; the claim lands on arrival
    let second = h.mirror.get_state_info_by_id_and_state(&u(1), &u(222)).unwrap();
    assert_eq!(second.replaced_by_state, u(333));
    assert_eq!(second.replaced_at_timestamp, u(1300));
    assert_eq!(second.replaced_at_block, u(130));
    assert!(h.mirror.pending_state_successor(&u(1), &u(222)).is_none());
    assert!(!h.mirror.get_state_info_by_id(&u(1)).unwrap().is_replaced());
}

#[test]
fn test_identities_are_independent() {
    let mut h = MirrorHarness::new();
    h.transit_state(0, state_fields(1, 111, 1000)).unwrap();
    h.transit_state(0, state_fields(2, 111, 1000)).unwrap();
    h.transit_state(111, state_fields(2, 222, 1100)).unwrap();

    assert_eq!(h.mirror.get_identity_last_state(&u(1)), Some(u(111)));
    assert_eq!(h.mirror.get_identity_last_state(&u(2)), Some(u(222)));
    assert!(!h
        .mirror
        .get_state_info_by_id_and_state(&u(1), &u(111))
        .unwrap()
        .is_replaced());
}

#[test]
fn test_duplicate_state_rejected() {
    let mut h = MirrorHarness::new();
    h.transit_state(0, state_fields(1, 111, 1000)).unwrap();

    let expected = Err(MirrorError::DuplicateRecord(RecordKey::State {
        identity: u(1),
        state: u(111),
    }));

    // Validly attested
    assert_eq!(h.transit_state(0, state_fields(1, 111, 1000)), expected);
    // Garbage proof
    let garbage = AttestationProof::new(Vec::new(), vec![0xFF; 65]);
    assert_eq!(
        h.mirror
            .transit_state_record(u(0), state_fields(1, 111, 1000), &garbage),
        expected
    );

    let err = expected.unwrap_err();
    assert!(err.to_string().contains("unable to update already stored"));
}

#[test]
fn test_state_getters() {
    let mut h = MirrorHarness::new();
    assert!(!h.mirror.identity_exists(&u(1)));
    assert_eq!(h.mirror.get_identity_last_state(&u(1)), None);

    h.transit_state(0, state_fields(1, 111, 1000)).unwrap();

    assert!(h.mirror.identity_exists(&u(1)));
    assert!(h.mirror.state_exists(&u(1), &u(111)));
    assert!(!h.mirror.state_exists(&u(1), &u(222)));
    assert!(!h.mirror.state_exists(&u(2), &u(111)));

    let info = h.mirror.get_state_info_by_id(&u(1)).unwrap();
    assert_eq!(info.identity, u(1));
    assert_eq!(info.created_at_timestamp, u(1000));
    assert_eq!(info.created_at_block, u(100));
    assert_eq!(info.replaced_at_timestamp, u(0));
}

#[test]
fn test_zero_state_rejected() {
    let mut h = MirrorHarness::new();
    assert_eq!(
        h.transit_state(0, state_fields(1, 0, 1000)),
        Err(MirrorError::ZeroTarget)
    );
    assert!(h.events.is_empty());
}

#[test]
fn test_unauthorized_state_attestation() {
    let mut h = MirrorHarness::new();
    let mut stranger = super::fixtures::new_oracle();
    let fields = state_fields(1, 111, 1000);
    let leaf = mirror_core::state_leaf(&h.mirror.source_registry(), &u(0), &fields);
    let proof = stranger.attest(&leaf);

    assert_eq!(
        h.mirror.transit_state_record(u(0), fields, &proof),
        Err(MirrorError::InvalidSignature)
    );
    assert!(!h.mirror.identity_exists(&u(1)));
}

// =============================================================================
// ROOT TRANSITIONS
// =============================================================================

#[test]
fn test_sequential_root_transitions() {
    let mut h = MirrorHarness::new();
    h.transit_root(0, root_fields(111, 1000)).unwrap();
    h.transit_root(111, root_fields(222, 1200)).unwrap();

    assert_eq!(h.mirror.get_current_root(), Some(u(222)));
    let first = h.mirror.get_root_info(&u(111)).unwrap();
    assert_eq!(first.replaced_by_root, u(222));
    assert_eq!(first.replaced_at_timestamp, u(1200));
    assert_eq!(h.mirror.get_current_root_info().unwrap().root, u(222));
}

#[test]
fn test_out_of_order_root_transitions() {
    let mut h = MirrorHarness::new();
    h.transit_root(222, root_fields(333, 1300)).unwrap();
    assert_eq!(
        h.mirror.pending_root_successor(&u(222)).unwrap().successor,
        u(333)
    );

    h.transit_root(0, root_fields(111, 1000)).unwrap();
    h.transit_root(111, root_fields(222, 1200)).unwrap();

    assert_eq!(h.mirror.get_current_root(), Some(u(333)));
    assert_eq!(h.mirror.get_root_info(&u(111)).unwrap().replaced_by_root, u(222));
    let second = h.mirror.get_root_info(&u(222)).unwrap();
    assert_eq!(second.replaced_by_root, u(333));
    assert_eq!(second.replaced_at_timestamp, u(1300));
    assert_eq!(second.replaced_at_block, u(130));
    assert!(h.mirror.pending_root_successor(&u(222)).is_none());
}

#[test]
fn test_root_chain_independent_of_states() {
    let mut h = MirrorHarness::new();
    h.transit_state(0, state_fields(1, 111, 1000)).unwrap();
    h.transit_root(0, root_fields(111, 1000)).unwrap();

    // Same numeric value in both key spaces
    assert!(h.mirror.state_exists(&u(1), &u(111)));
    assert_eq!(h.mirror.get_current_root(), Some(u(111)));
    assert_eq!(
        h.transit_root(0, root_fields(111, 1000)),
        Err(MirrorError::DuplicateRecord(RecordKey::Root(u(111))))
    );
}

#[test]
fn test_root_leaf_is_not_a_state_leaf() {
    let mut h = MirrorHarness::new();
    let fields = state_fields(1, 111, 1000);
    let proof = h.attest_state(0, &fields);

    // A state attestation cannot be replayed as a root
    assert_eq!(
        h.mirror
            .transit_root_record(u(0), root_fields(111, 1000), &proof),
        Err(MirrorError::InvalidSignature)
    );
}

// =============================================================================
// COMBINED TRANSITIONS
// =============================================================================

#[test]
fn test_combined_transition_commits_both() {
    let mut h = MirrorHarness::new();
    h.transit_combined(0, 0, state_fields(1, 111, 1000), root_fields(555, 1000))
        .unwrap();

    assert_eq!(h.mirror.get_identity_last_state(&u(1)), Some(u(111)));
    assert_eq!(h.mirror.get_current_root(), Some(u(555)));
    assert_eq!(
        h.events.events(),
        vec![
            MirrorEvent::StateTransited {
                identity: u(1),
                state: u(111),
                prev_state: u(0)
            },
            MirrorEvent::RootTransited {
                root: u(555),
                prev_root: u(0)
            },
        ]
    );
}

#[test]
fn test_combined_transition_duplicate_state_commits_nothing() {
    let mut h = MirrorHarness::new();
    h.transit_state(0, state_fields(1, 111, 1000)).unwrap();

    assert!(matches!(
        h.transit_combined(0, 0, state_fields(1, 111, 1000), root_fields(555, 1000)),
        Err(MirrorError::DuplicateRecord(RecordKey::State { .. }))
    ));
    assert_eq!(h.mirror.get_current_root(), None);
}

#[test]
fn test_combined_transition_bad_signature_commits_nothing() {
    let mut h = MirrorHarness::new();
    let state = state_fields(1, 111, 1000);
    let root = root_fields(555, 1000);
    let mut proof = h.attest_combined(0, 0, &state, &root);
    proof.signature[10] ^= 0x01;

    assert!(h
        .mirror
        .transit_combined(u(0), u(0), state, root, &proof)
        .is_err());
    assert!(!h.mirror.identity_exists(&u(1)));
    assert_eq!(h.mirror.get_current_root(), None);
    assert!(h.events.is_empty());
}

// =============================================================================
// PROOF WIRE FORMAT
// =============================================================================

#[test]
fn test_proof_survives_json() {
    let mut h = MirrorHarness::new();
    let fields = state_fields(1, 111, 1000);
    let proof = h.attest_state(0, &fields);

    let json = serde_json::to_string(&proof).unwrap();
    let decoded: AttestationProof = serde_json::from_str(&json).unwrap();
    h.mirror.transit_state_record(u(0), fields, &decoded).unwrap();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Any insertion order of a linear chain ends with every predecessor
    /// linked to its successor and no claim left pending.
    #[test]
    fn prop_links_do_not_depend_on_arrival_order(order in Just(vec![1u64, 2, 3, 4, 5]).prop_shuffle()) {
        let mut h = MirrorHarness::new();
        for state in &order {
            let prev = state - 1;
            h.transit_state(prev, state_fields(9, *state, state * 100)).unwrap();
        }

        for state in 1..5u64 {
            let info = h.mirror.get_state_info_by_id_and_state(&u(9), &u(state)).unwrap();
            prop_assert_eq!(info.replaced_by_state, u(state + 1));
            prop_assert_eq!(info.replaced_at_timestamp, u((state + 1) * 100));
            prop_assert!(h.mirror.pending_state_successor(&u(9), &u(state)).is_none());
        }
        prop_assert!(!h.mirror.get_state_info_by_id_and_state(&u(9), &u(5)).unwrap().is_replaced());
    }
}
