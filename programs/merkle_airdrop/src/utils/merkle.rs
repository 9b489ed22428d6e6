use anchor_lang::solana_program::keccak::hashv;
use super::leaf::{hash_leaf, ClaimRecord, LeafEncoding};

/// Parent of two nodes: keccak(min(a, b) || max(a, b))
///
/// Ordering the pair makes the parent independent of which child is left,
/// so proofs carry no position bits.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Folds `proof` onto `leaf` and compares the result with `root`.
///
/// Proof length is not checked separately: a proof of the wrong length
/// does not reproduce the root.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |current, sibling| hash_pair(&current, sibling));
    computed == root
}

/// Verifies a record against `root` using the given leaf encoding
pub fn verify_record(
    record: &ClaimRecord,
    encoding: LeafEncoding,
    proof: &[[u8; 32]],
    root: [u8; 32],
) -> bool {
    verify(proof, root, hash_leaf(record, encoding))
}
