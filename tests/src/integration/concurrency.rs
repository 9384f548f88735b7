//! # Concurrent Access
//!
//! One writer feeding a `SharedMirror` while readers query it.

use super::fixtures::{root_fields, u, MirrorHarness};
use mirror_core::{MirrorQueryApi, MirrorTransitApi, SharedMirror};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

#[test]
fn test_readers_never_see_a_head_without_its_record() {
    let MirrorHarness {
        mut oracle,
        mirror,
        events,
    } = MirrorHarness::new();
    let source = mirror.source_registry();
    let shared = SharedMirror::new(mirror);
    let done = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let handle = shared.clone();
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let mut observed = 0u64;
                while !done.load(Ordering::Acquire) {
                    let snapshot = handle.read();
                    if let Some(head) = snapshot.get_current_root() {
                        let info = snapshot.get_root_info(&head).expect("head has a record");
                        assert!(!info.is_replaced());
                        observed += 1;
                    }
                }
                observed
            })
        })
        .collect();

    for root in 1..=50u64 {
        let fields = root_fields(root, root * 10);
        let leaf = mirror_core::root_leaf(&source, &u(root - 1), &fields);
        let proof = oracle.attest(&leaf);
        shared
            .write()
            .transit_root_record(u(root - 1), fields, &proof)
            .unwrap();
    }
    done.store(true, Ordering::Release);

    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(shared.get_current_root(), Some(u(50)));
    assert_eq!(events.len(), 50);
}
