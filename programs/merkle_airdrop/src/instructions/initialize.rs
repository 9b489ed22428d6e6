use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new airdrop
 *
 * This instruction:
 * - Creates the airdrop PDA holding the admin, root and reward configuration
 * - Creates a token vault PDA owned by the airdrop
 * - Optionally funds the vault from the admin's token account
 *
 * Access Control: The signer becomes the admin
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The airdrop account (PDA)
    /// - Derived from: ["airdrop", token_mint, admin]
    #[account(
        init,
        payer = admin,
        space = Airdrop::LEN,
        seeds = [
            AIRDROP_SEED.as_bytes(),
            token_mint.key().as_ref(),
            admin.key().as_ref(),
        ],
        bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// Token vault account (PDA) holding the tokens to distribute
    /// - Controlled by the airdrop PDA as token authority
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = airdrop,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump,
        payer = admin,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint being distributed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        mint::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Admin's token account funding the vault
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = admin,
        token::token_program = token_program,
    )]
    pub admin_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The admin of the airdrop
    /// - Pays for account creation
    /// - Only this account can replace the merkle root
    #[account(mut)]
    pub admin: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Creates a new airdrop
 *
 * @param ctx - The account context containing all required accounts
 * @param initial_root - Root to commit immediately, or None to set it later
 * @param fixed_reward - Reward per recipient when leaves only commit to the recipient
 * @param initial_deposit - Tokens moved from the admin to the vault, zero to fund later
 */
pub fn handle_initialize(
    ctx: Context<Initialize>,
    initial_root: Option<[u8; 32]>,
    fixed_reward: Option<u64>,
    initial_deposit: u64,
) -> Result<()> {
    let airdrop = &mut ctx.accounts.airdrop;

    airdrop.initialize(
        ctx.bumps.airdrop,
        ctx.accounts.admin.key(),
        ctx.accounts.token_mint.key(),
        ctx.accounts.token_vault.key(),
        initial_root,
        fixed_reward,
    )?;

    if initial_deposit > 0 {
        transfer_token(
            ctx.accounts.admin.to_account_info(),
            ctx.accounts.admin_token_account.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            initial_deposit,
            ctx.accounts.token_mint.decimals,
            None, // Admin signs the deposit
        )?;
    }

    msg!(
        "Airdrop initialized - Mint: {}, Admin: {}, Deposit: {}",
        airdrop.token_mint,
        airdrop.admin,
        initial_deposit
    );

    emit_cpi!(AirdropInitialized {
        airdrop: airdrop.key(),
        admin: airdrop.admin,
        token_mint: airdrop.token_mint,
        token_vault: airdrop.token_vault,
        merkle_root: airdrop.merkle_root,
        fixed_reward,
        initial_deposit,
    });

    Ok(())
}
