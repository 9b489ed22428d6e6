use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::{hash_leaf, verify, ClaimRecord, LeafEncoding, TokenLedger, VaultLedger};
use crate::event::*;

/**
 * Account context for claiming tokens
 *
 * The claim status PDA is addressed by the leaf hash, so the claimed-set is
 * keyed by leaf. The handler re-derives the leaf from the record and rejects
 * a mismatch before anything else.
 *
 * Access Control: The recipient of a record with a valid merkle proof
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(leaf: [u8; 32])]
pub struct Claim<'info> {
    /// The airdrop account
    /// - Will be modified to update total_claimed
    #[account(
        mut,
        seeds = [
            AIRDROP_SEED.as_bytes(),
            airdrop.token_mint.as_ref(),
            airdrop.admin.as_ref(),
        ],
        bump = airdrop.bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// Claim status for this leaf
    /// - Derived from: ["claimed", airdrop_key, leaf]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), airdrop.key().as_ref(), leaf.as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Token vault holding the tokens to be distributed
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    #[account(
        mut,
        token::mint = airdrop.token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    #[account(
        mint::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The claimant, who must be the record's recipient
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/// Outcome of a successful claim, mirrored by the `Claimed` event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub recipient: Pubkey,
    pub rank: Option<u32>,
    pub amount: u64,
    pub total_claimed: u64,
}

/**
 * Claim state machine, independent of how tokens move
 *
 * Validation Process:
 * 1. Leaf argument must be the hash of the record
 * 2. Proof must fold to the active root
 * 3. Leaf must not be claimed yet
 * 4. Record recipient must be the claimant
 *
 * The leaf is marked claimed before the ledger is called, so a reentrant
 * claim during the transfer sees AlreadyClaimed. Any error after that point
 * aborts the instruction and the runtime discards the mark.
 */
pub fn process_claim<L: TokenLedger>(
    airdrop: &mut Airdrop,
    claim_status: &mut ClaimStatus,
    leaf: &[u8; 32],
    record: &ClaimRecord,
    proof: &[[u8; 32]],
    claimant: &Pubkey,
    ledger: &mut L,
) -> Result<ClaimReceipt> {
    // ===== VALIDATION PHASE =====

    let encoding = airdrop.leaf_encoding();
    let computed_leaf = hash_leaf(record, encoding);
    require!(computed_leaf == *leaf, AirdropError::LeafMismatch);

    require!(airdrop.has_root(), AirdropError::NoMerkleRoot);
    require!(
        verify(proof, airdrop.merkle_root, computed_leaf),
        AirdropError::InvalidProof
    );

    require!(!claim_status.claimed, AirdropError::AlreadyClaimed);

    require_keys_eq!(record.recipient, *claimant, AirdropError::IdentityMismatch);

    let amount = airdrop.entitlement(record)?;

    // Only report what the leaf commits to
    let rank = match encoding {
        LeafEncoding::RecipientOnly => None,
        LeafEncoding::RecipientRankAmount => record.rank,
    };

    // ===== EFFECTS PHASE =====

    claim_status.mark_claimed(record.recipient, amount)?;
    let total_claimed = airdrop.record_claim(amount)?;

    // ===== INTERACTIONS PHASE =====

    ledger.transfer(&record.recipient, amount)?;

    Ok(ClaimReceipt {
        recipient: record.recipient,
        rank,
        amount,
        total_claimed,
    })
}

/**
 * Processes a token claim with merkle proof verification
 *
 * @param ctx - The account context containing all required accounts
 * @param leaf - Leaf hash of the record, used to address the claim status PDA
 * @param record - The claim record committed in the tree
 * @param proof - Sibling hashes from the leaf to the root
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    leaf: [u8; 32],
    record: ClaimRecord,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let claimant = ctx.accounts.claimant.key();
    let airdrop_key = ctx.accounts.airdrop.key();

    // Prepare PDA signing seeds for the vault transfer
    let token_mint_key = ctx.accounts.airdrop.token_mint;
    let admin_key = ctx.accounts.airdrop.admin;
    let bump_seed = [ctx.accounts.airdrop.bump];
    let seeds: &[&[u8]] = &[
        AIRDROP_SEED.as_bytes(),
        token_mint_key.as_ref(),
        admin_key.as_ref(),
        &bump_seed,
    ];
    let signer = &[seeds];

    let mut ledger = VaultLedger {
        authority: ctx.accounts.airdrop.to_account_info(),
        vault: ctx.accounts.token_vault.to_account_info(),
        vault_balance: ctx.accounts.token_vault.amount,
        recipient: claimant,
        recipient_token_account: ctx.accounts.claimant_token_account.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        decimals: ctx.accounts.token_mint.decimals,
        token_program: ctx.accounts.token_program.to_account_info(),
        signer_seeds: signer,
    };

    let receipt = process_claim(
        &mut ctx.accounts.airdrop,
        &mut ctx.accounts.claim_status,
        &leaf,
        &record,
        &proof,
        &claimant,
        &mut ledger,
    )?;

    msg!(
        "Claim successful - Wallet: {}, Amount: {}, Total claimed: {}",
        receipt.recipient,
        receipt.amount,
        receipt.total_claimed
    );

    emit_cpi!(Claimed {
        airdrop: airdrop_key,
        recipient: receipt.recipient,
        rank: receipt.rank,
        amount: receipt.amount,
        total_claimed: receipt.total_claimed,
    });

    Ok(())
}
