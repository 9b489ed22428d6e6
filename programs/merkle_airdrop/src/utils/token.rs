use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TransferChecked};
use crate::error::*;

/// Universal token transfer function that supports both SPL Token and Token 2022
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_program = token_program;

    let cpi_ctx = if let Some(seeds) = signer_seeds {
        CpiContext::new_with_signer(cpi_program, cpi_accounts, seeds)
    } else {
        CpiContext::new(cpi_program, cpi_accounts)
    };

    transfer_checked(cpi_ctx, amount, decimals)
}

/// Token ledger the claim engine pays out of.
///
/// Transfers fail fast: an amount above the pool balance is rejected
/// before anything moves.
pub trait TokenLedger {
    /// Tokens left in the distribution pool
    fn pool_balance(&self) -> u64;

    /// Moves `amount` from the pool to `recipient`
    fn transfer(&mut self, recipient: &Pubkey, amount: u64) -> Result<()>;
}

/// Airdrop vault backed by an SPL Token / Token 2022 account.
///
/// The vault is signed for by the airdrop PDA; `recipient_token_account`
/// must already be constrained to `recipient` by the instruction context.
pub struct VaultLedger<'a, 'info> {
    pub authority: AccountInfo<'info>,
    pub vault: AccountInfo<'info>,
    pub vault_balance: u64,
    pub recipient: Pubkey,
    pub recipient_token_account: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    pub decimals: u8,
    pub token_program: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl TokenLedger for VaultLedger<'_, '_> {
    fn pool_balance(&self) -> u64 {
        self.vault_balance
    }

    fn transfer(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*recipient, self.recipient, AirdropError::IdentityMismatch);
        require!(amount <= self.pool_balance(), AirdropError::TransferFailed);

        transfer_token(
            self.authority.clone(),
            self.vault.clone(),
            self.recipient_token_account.clone(),
            self.mint.clone(),
            self.token_program.clone(),
            amount,
            self.decimals,
            Some(self.signer_seeds), // PDA signing for the vault
        )?;

        self.vault_balance -= amount;
        Ok(())
    }
}
