use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    // Construction errors
    #[msg("Token ledger reference must not be the zero address")]
    ZeroAddress,

    // Access control errors
    #[msg("Only the admin can perform this action")]
    Unauthorized,

    // Merkle proof errors
    #[msg("No merkle root set")]
    NoMerkleRoot,
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Leaf hash does not match the claim record")]
    LeafMismatch,

    // Claim state errors
    #[msg("Airdrop is already claimed")]
    AlreadyClaimed,
    #[msg("Claim record recipient does not match the claimant")]
    IdentityMismatch,

    // Tree builder errors
    #[msg("Cannot build a merkle tree from no leaves")]
    EmptyInput,
    #[msg("Leaf index out of bounds")]
    IndexOutOfBounds,

    // Amount and transfer errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Token transfer failed")]
    TransferFailed,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match airdrop's token mint")]
    TokenMintMismatch,
}
