use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/// Account context for checking whether a leaf has been claimed
#[derive(Accounts)]
#[instruction(leaf: [u8; 32])]
pub struct IsClaimed<'info> {
    pub airdrop: Account<'info, Airdrop>,

    /// Claim status for the leaf; does not exist until the first claim
    /// CHECK: Address is pinned by seeds, contents are read only if initialized
    #[account(
        seeds = [CLAIM_SEED.as_bytes(), airdrop.key().as_ref(), leaf.as_ref()],
        bump
    )]
    pub claim_status: UncheckedAccount<'info>,
}

/// Account context for reading the active merkle root
#[derive(Accounts)]
pub struct GetMerkleRoot<'info> {
    pub airdrop: Account<'info, Airdrop>,
}

pub fn handle_is_claimed(ctx: Context<IsClaimed>, _leaf: [u8; 32]) -> Result<bool> {
    let info = ctx.accounts.claim_status.to_account_info();
    if !info.data_is_empty() {
        require_keys_eq!(*info.owner, crate::ID, ErrorCode::AccountOwnedByWrongProgram);
    }

    let data = info.try_borrow_data()?;
    ClaimStatus::read_claimed(&data)
}

pub fn handle_merkle_root(ctx: Context<GetMerkleRoot>) -> Result<[u8; 32]> {
    Ok(ctx.accounts.airdrop.merkle_root)
}
