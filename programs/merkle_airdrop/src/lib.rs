use anchor_lang::prelude::*;

declare_id!("2Ab8No85xrnnd2rFamKjQqGAK6Qu9EQ4eEh59oaZEPBL");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use utils::ClaimRecord;

/**
 * Merkle Airdrop Program
 *
 * A one-time token airdrop: each eligible record in a merkle tree can be
 * claimed exactly once by its recipient.
 *
 * Key Features:
 * - Fixed-width leaf encoding, either recipient-only (fixed reward) or
 *   recipient/rank/amount (per-recipient payouts)
 * - Sorted-pair merkle hashing, so proofs carry no left/right bits
 * - Claimed-set keyed by leaf hash; the flag is set before the transfer
 * - Admin-only root rotation that never touches claimed state
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Airdrop PDA: admin, active root, reward configuration, totals
 * - Token Vault PDA: holds tokens to be distributed
 * - Claim Status PDAs: one per claimed leaf
 *
 * Workflow:
 * 1. Admin builds the tree off-chain with `utils::MerkleTree`
 * 2. Admin creates the airdrop, funds the vault and commits the root
 * 3. Recipients claim with their record and proof
 * 4. Admin rotates the root to change the eligibility set
 */
#[program]
pub mod merkle_airdrop {
    use super::*;

    /**
     * Creates a new airdrop
     *
     * @param ctx - Account context containing airdrop, vault, mint and admin accounts
     * @param initial_root - Root to commit immediately, if already known
     * @param fixed_reward - Reward per recipient for recipient-only leaves
     * @param initial_deposit - Tokens to move into the vault, zero for none
     *
     * Access Control: The signer becomes the admin
     */
    pub fn initialize(
        ctx: Context<Initialize>,
        initial_root: Option<[u8; 32]>,
        fixed_reward: Option<u64>,
        initial_deposit: u64,
    ) -> Result<()> {
        handle_initialize(ctx, initial_root, fixed_reward, initial_deposit)
    }

    /**
     * Replaces the merkle root
     *
     * @param ctx - Account context containing airdrop and admin accounts
     * @param new_root - 32-byte root of the new eligibility tree
     *
     * Access Control: Admin only
     */
    pub fn set_root(ctx: Context<SetRoot>, new_root: [u8; 32]) -> Result<()> {
        handle_set_root(ctx, new_root)
    }

    /**
     * Claims the tokens of one leaf
     *
     * @param ctx - Account context containing airdrop, claim status and token accounts
     * @param leaf - Leaf hash of `record`
     * @param record - The (recipient, rank, amount) record committed in the tree
     * @param proof - Array of 32-byte hashes forming the merkle proof
     *
     * Access Control: The record's recipient
     */
    pub fn claim(
        ctx: Context<Claim>,
        leaf: [u8; 32],
        record: ClaimRecord,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        handle_claim(ctx, leaf, record, proof)
    }

    /// Whether `leaf` has been claimed
    pub fn is_claimed(ctx: Context<IsClaimed>, leaf: [u8; 32]) -> Result<bool> {
        handle_is_claimed(ctx, leaf)
    }

    /// The active merkle root, all zeros if none is set
    pub fn merkle_root(ctx: Context<GetMerkleRoot>) -> Result<[u8; 32]> {
        handle_merkle_root(ctx)
    }
}
