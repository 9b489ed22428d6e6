use anchor_lang::prelude::*;
use crate::error::*;
use super::leaf::{hash_leaf, ClaimRecord, LeafEncoding};
use super::merkle::hash_pair;

/**
 * Merkle tree builder used off-chain to produce the root and proofs
 *
 * Tree Structure:
 * - Leaves: hash_leaf(record), sorted ascending and deduplicated
 * - Intermediate nodes: hash_pair(a, b) with lexicographic ordering
 * - Odd node at the end of a level: promoted unchanged to the next level
 * - Root: the single node of the last level
 *
 * Sorting the leaves makes the root independent of input order, and the
 * on-chain `verify` reproduces the same root from any leaf's proof.
 */
#[derive(Debug, Clone)]
pub struct MerkleTree {
    levels: Vec<Vec<[u8; 32]>>,
}

impl MerkleTree {
    /// Builds a tree over a set of leaf hashes
    pub fn build<I>(leaves: I) -> Result<Self>
    where
        I: IntoIterator<Item = [u8; 32]>,
    {
        let mut leaves: Vec<[u8; 32]> = leaves.into_iter().collect();
        leaves.sort_unstable();
        leaves.dedup();

        if leaves.is_empty() {
            return err!(AirdropError::EmptyInput);
        }

        let mut levels = vec![leaves];
        while let Some(level) = levels.last().filter(|level| level.len() > 1) {
            let next: Vec<[u8; 32]> = level
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_pair(left, right),
                    _ => pair[0],
                })
                .collect();
            levels.push(next);
        }

        Ok(MerkleTree { levels })
    }

    /// Builds a tree over the leaf hashes of `records`
    pub fn from_records<'a, I>(records: I, encoding: LeafEncoding) -> Result<Self>
    where
        I: IntoIterator<Item = &'a ClaimRecord>,
    {
        Self::build(records.into_iter().map(|record| hash_leaf(record, encoding)))
    }

    pub fn root(&self) -> [u8; 32] {
        // build() guarantees a non-empty last level
        self.levels[self.levels.len() - 1][0]
    }

    /// Number of distinct leaves
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Sorted leaf hashes
    pub fn leaves(&self) -> &[[u8; 32]] {
        &self.levels[0]
    }

    /// Number of levels above the leaves
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Position of a leaf in sorted order, if present
    pub fn index_of(&self, leaf: &[u8; 32]) -> Option<usize> {
        self.levels[0].binary_search(leaf).ok()
    }

    /// Sibling path from the leaf at `index` (in sorted order) to the root
    pub fn proof_at(&self, index: usize) -> Result<Vec<[u8; 32]>> {
        require!(index < self.leaf_count(), AirdropError::IndexOutOfBounds);

        let mut proof = Vec::with_capacity(self.depth());
        let mut current_index = index;

        for level in &self.levels[..self.depth()] {
            // A promoted node has no sibling at this level
            if let Some(sibling) = level.get(current_index ^ 1) {
                proof.push(*sibling);
            }
            current_index /= 2;
        }

        Ok(proof)
    }

    /// Sibling path for `leaf`, or None if the leaf is not in the tree
    pub fn proof_of(&self, leaf: &[u8; 32]) -> Option<Vec<[u8; 32]>> {
        let index = self.index_of(leaf)?;
        self.proof_at(index).ok()
    }
}
