//! # Sorted-Pair Merkle Trees
//!
//! Every internal node is `keccak256(min(a, b) ‖ max(a, b))`, so a proof is a
//! bare list of sibling hashes with no left/right flags. An odd node at the
//! end of a level is promoted to the next level unchanged.

use crate::algorithms::encoding::keccak256;
use shared_types::{Hash, ZERO_HASH};

/// Hash two nodes in sorted order.
pub fn hash_sorted_pair(a: &Hash, b: &Hash) -> Hash {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(low);
    buf[32..].copy_from_slice(high);
    keccak256(&buf)
}

/// Fold a leaf through its sibling path (leaf→root order) into a root.
///
/// # Time Complexity: O(path length)
pub fn fold_sorted_path(leaf: &Hash, sibling_path: &[Hash]) -> Hash {
    sibling_path
        .iter()
        .fold(*leaf, |current, sibling| hash_sorted_pair(&current, sibling))
}

/// Root of a sorted-pair tree. Empty input yields the zero hash.
pub fn compute_root(leaves: &[Hash]) -> Hash {
    if leaves.is_empty() {
        return ZERO_HASH;
    }

    let mut level = leaves.to_vec();
    while level.len() > 1 {
        level = next_level(&level);
    }
    level[0]
}

/// Sibling path for `leaves[index]`, or `None` if the index is out of range.
pub fn build_proof(leaves: &[Hash], index: usize) -> Option<Vec<Hash>> {
    if index >= leaves.len() {
        return None;
    }

    let mut proof = Vec::new();
    let mut level = leaves.to_vec();
    let mut index = index;

    while level.len() > 1 {
        let sibling = index ^ 1;
        // A promoted odd node has no sibling at this level
        if sibling < level.len() {
            proof.push(level[sibling]);
        }
        level = next_level(&level);
        index /= 2;
    }

    Some(proof)
}

fn next_level(level: &[Hash]) -> Vec<Hash> {
    level
        .chunks(2)
        .map(|chunk| match chunk {
            [left, right] => hash_sorted_pair(left, right),
            [single] => *single,
            _ => unreachable!("chunks(2) yields one or two nodes"),
        })
        .collect()
}
