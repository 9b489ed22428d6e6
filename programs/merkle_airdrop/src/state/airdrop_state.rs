use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::utils::{ClaimRecord, LeafEncoding};

/**
 * Main airdrop state account
 *
 * Holds the currently active merkle root, the admin allowed to replace it,
 * and the token accounts the airdrop pays out of.
 *
 * Derivation: ["airdrop", token_mint, admin]
 *
 * Lifecycle:
 * 1. Created during initialize, optionally with a root already committed
 * 2. Root replaced by the admin through set_root (any number of times)
 * 3. total_claimed / claim_count incremented by every successful claim
 */
#[account]
#[derive(Default, Debug)]
pub struct Airdrop {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Admin allowed to replace the merkle root
    pub admin: Pubkey,

    /// Token mint being distributed
    pub token_mint: Pubkey,

    /// Vault PDA holding the tokens to distribute
    /// - Derived from: ["vault", airdrop_key]
    pub token_vault: Pubkey,

    /// Active merkle root, all zeros when none is committed
    pub merkle_root: [u8; 32],

    /// Reward paid to every recipient when leaves carry no amount
    /// - Zero means leaves are recipient/rank/amount and pay their own amount
    pub fixed_reward: u64,

    /// Total amount of tokens claimed by all recipients
    pub total_claimed: u64,

    /// Number of leaves claimed
    pub claim_count: u64,
}

impl Airdrop {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Airdrop>();

    /// Validates construction parameters and writes the initial state.
    ///
    /// Nothing is written when validation fails.
    pub fn initialize(
        &mut self,
        bump: u8,
        admin: Pubkey,
        token_mint: Pubkey,
        token_vault: Pubkey,
        initial_root: Option<[u8; 32]>,
        fixed_reward: Option<u64>,
    ) -> Result<()> {
        require!(token_mint != Pubkey::default(), AirdropError::ZeroAddress);
        require!(fixed_reward != Some(0), AirdropError::InvalidAmount);

        self.bump = bump;
        self.admin = admin;
        self.token_mint = token_mint;
        self.token_vault = token_vault;
        self.merkle_root = initial_root.unwrap_or(EMPTY_ROOT);
        self.fixed_reward = fixed_reward.unwrap_or(0);
        self.total_claimed = 0;
        self.claim_count = 0;
        Ok(())
    }

    /// How leaves of this airdrop are encoded before hashing
    pub fn leaf_encoding(&self) -> LeafEncoding {
        if self.fixed_reward > 0 {
            LeafEncoding::RecipientOnly
        } else {
            LeafEncoding::RecipientRankAmount
        }
    }

    pub fn has_root(&self) -> bool {
        self.merkle_root != EMPTY_ROOT
    }

    /// Amount a verified record is entitled to.
    ///
    /// Recipient-only leaves do not commit to an amount, so the trusted
    /// fixed reward is paid and `record.amount` is ignored.
    pub fn entitlement(&self, record: &ClaimRecord) -> Result<u64> {
        let amount = match self.leaf_encoding() {
            LeafEncoding::RecipientOnly => self.fixed_reward,
            LeafEncoding::RecipientRankAmount => record.amount,
        };
        require!(amount > 0, AirdropError::InvalidAmount);
        Ok(amount)
    }

    /// Admin gate consulted by every privileged operation
    pub fn authorize_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.admin, AirdropError::Unauthorized);
        Ok(())
    }

    /// Replaces the active root and returns the previous one.
    ///
    /// The root is trusted as given; claimed leaves stay claimed and
    /// unclaimed leaves of the old tree simply stop verifying.
    pub fn set_root(&mut self, new_root: [u8; 32], caller: &Pubkey) -> Result<[u8; 32]> {
        self.authorize_admin(caller)?;
        let previous_root = self.merkle_root;
        self.merkle_root = new_root;
        Ok(previous_root)
    }

    /// Books a successful claim and returns the new running total
    pub fn record_claim(&mut self, amount: u64) -> Result<u64> {
        let total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(AirdropError::ArithmeticOverflow)?;
        let claim_count = self
            .claim_count
            .checked_add(1)
            .ok_or(AirdropError::ArithmeticOverflow)?;

        self.total_claimed = total_claimed;
        self.claim_count = claim_count;
        Ok(total_claimed)
    }
}
