use anchor_lang::prelude::*;
use crate::error::*;

/**
 * Per-leaf claim status account
 *
 * One account per leaf hash forms the claimed-set of an airdrop. The only
 * transition is unclaimed -> claimed; the account is never reset or closed,
 * so a leaf pays out at most once across any number of root rotations.
 *
 * Derivation: ["claimed", airdrop_key, leaf_hash]
 *
 * Lifecycle:
 * 1. Created on first claim attempt (using init_if_needed)
 * 2. Marked claimed in the same transaction, before the token transfer
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimStatus {
    /// Whether this leaf has been claimed
    pub claimed: bool,

    /// Recipient paid for this leaf
    pub recipient: Pubkey,

    /// Amount paid for this leaf
    pub amount: u64,
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimStatus>();

    /// Claimed flag from raw account data; an uncreated account is unclaimed
    pub fn read_claimed(data: &[u8]) -> Result<bool> {
        if data.is_empty() {
            return Ok(false);
        }
        let status = ClaimStatus::try_deserialize(&mut &data[..])?;
        Ok(status.claimed)
    }

    /// Flips the leaf to claimed, failing if it already is
    pub fn mark_claimed(&mut self, recipient: Pubkey, amount: u64) -> Result<()> {
        require!(!self.claimed, AirdropError::AlreadyClaimed);
        self.claimed = true;
        self.recipient = recipient;
        self.amount = amount;
        Ok(())
    }
}
