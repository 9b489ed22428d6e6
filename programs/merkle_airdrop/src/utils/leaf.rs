use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak::hashv;
use crate::constants::*;

/// One eligible entry of an airdrop, as committed in the merkle tree.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClaimRecord {
    /// Wallet entitled to the tokens
    pub recipient: Pubkey,
    /// Optional rank or tag distinguishing payout tiers
    pub rank: Option<u32>,
    /// Amount the recipient is entitled to
    pub amount: u64,
}

/// Which fields of a [`ClaimRecord`] a leaf commits to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeafEncoding {
    /// `recipient`
    ///
    /// Used when every recipient gets the same trusted reward.
    RecipientOnly,
    /// `recipient || rank_tag || rank (u32 LE) || amount (u64 LE)`
    RecipientRankAmount,
}

impl LeafEncoding {
    pub fn encoded_len(&self) -> usize {
        match self {
            LeafEncoding::RecipientOnly => RECIPIENT_ONLY_LEAF_LEN,
            LeafEncoding::RecipientRankAmount => RECIPIENT_RANK_AMOUNT_LEAF_LEN,
        }
    }
}

/// Serializes a record into its fixed-width leaf bytes.
///
/// Every field is fixed width, and an absent rank is tagged rather than
/// written as zero, so distinct records never share an encoding.
pub fn encode_leaf(record: &ClaimRecord, encoding: LeafEncoding) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(encoding.encoded_len());
    bytes.extend_from_slice(record.recipient.as_ref());

    if encoding == LeafEncoding::RecipientRankAmount {
        match record.rank {
            Some(rank) => {
                bytes.push(1);
                bytes.extend_from_slice(&rank.to_le_bytes());
            }
            None => {
                bytes.push(0);
                bytes.extend_from_slice(&0u32.to_le_bytes());
            }
        }
        bytes.extend_from_slice(&record.amount.to_le_bytes());
    }

    bytes
}

/// keccak-256 of the record's leaf encoding
pub fn hash_leaf(record: &ClaimRecord, encoding: LeafEncoding) -> [u8; 32] {
    hashv(&[encode_leaf(record, encoding).as_slice()]).to_bytes()
}
