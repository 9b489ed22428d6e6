use anchor_lang::prelude::*;
use crate::state::*;
use crate::event::*;

/**
 * Account context for replacing the merkle root
 *
 * Access Control: Only the admin, checked by `Airdrop::authorize_admin`
 *
 * Business Logic:
 * - The root defines which (recipient, rank, amount) records can claim
 * - Replacing it rejects proofs built against the previous root
 * - Leaves already claimed stay claimed; nothing in the claimed-set changes
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetRoot<'info> {
    /// The airdrop account to update
    #[account(mut)]
    pub airdrop: Account<'info, Airdrop>,

    /// The caller, who must be the airdrop admin
    pub admin: Signer<'info>,
}

/**
 * Replaces the active merkle root
 *
 * @param ctx - The account context containing airdrop and admin accounts
 * @param new_root - 32-byte root of the new eligibility tree
 *
 * The root is not validated against any tree; a zero root disables claims
 * until a real one is set.
 */
pub fn handle_set_root(ctx: Context<SetRoot>, new_root: [u8; 32]) -> Result<()> {
    let airdrop = &mut ctx.accounts.airdrop;
    let admin = ctx.accounts.admin.key();

    let previous_root = airdrop.set_root(new_root, &admin)?;

    emit_cpi!(RootUpdated {
        airdrop: airdrop.key(),
        admin,
        previous_root,
        new_root,
    });

    Ok(())
}
