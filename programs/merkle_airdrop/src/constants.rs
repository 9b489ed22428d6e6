use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds and leaf layout sizes shared by the on-chain verifier and the
 * off-chain tree builder. Changing any of these breaks every issued proof.
 */

#[constant]
/// ===== PDA SEED CONSTANTS =====

/// Seed for airdrop PDA derivation
/// - Used in: ["airdrop", token_mint, admin]
/// - One airdrop per (token, admin) pair
pub const AIRDROP_SEED: &str = "airdrop";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", airdrop_key]
/// - The vault is owned by the airdrop PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for claim status PDA derivation
/// - Used in: ["claimed", airdrop_key, leaf_hash]
/// - One account per leaf, so the claimed-set is keyed by leaf, not by wallet
pub const CLAIM_SEED: &str = "claimed";

/// ===== LEAF LAYOUT CONSTANTS =====

/// Bytes of a recipient-only leaf: recipient pubkey
pub const RECIPIENT_ONLY_LEAF_LEN: usize = 32;

/// Bytes of a recipient/rank/amount leaf:
/// recipient (32) || rank tag (1) || rank u32 LE (4) || amount u64 LE (8)
pub const RECIPIENT_RANK_AMOUNT_LEAF_LEN: usize = 32 + 1 + 4 + 8;

/// Root value meaning "no root committed yet"
pub const EMPTY_ROOT: [u8; 32] = [0; 32];
