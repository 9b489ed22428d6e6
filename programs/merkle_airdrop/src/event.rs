use anchor_lang::prelude::*;

/// Event emitted when a new airdrop is created
#[event]
pub struct AirdropInitialized {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Admin allowed to rotate the merkle root
    pub admin: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Root committed at construction, zero if none
    pub merkle_root: [u8; 32],
    /// Fixed reward per recipient, if leaves carry no amount
    pub fixed_reward: Option<u64>,
    /// Amount deposited into the vault at construction
    pub initial_deposit: u64,
}

/// Event emitted when the admin replaces the merkle root
#[event]
pub struct RootUpdated {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Admin who replaced the root
    pub admin: Pubkey,
    /// Root that was active before this update
    pub previous_root: [u8; 32],
    /// Root that is active from now on
    pub new_root: [u8; 32],
}

/// Event emitted when a leaf is claimed
#[event]
pub struct Claimed {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Recipient that received the tokens
    pub recipient: Pubkey,
    /// Rank carried by the leaf, if any
    pub rank: Option<u32>,
    /// Amount transferred
    pub amount: u64,
    /// Total amount claimed from the airdrop by all recipients
    pub total_claimed: u64,
}
