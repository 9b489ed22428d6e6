use anchor_lang::prelude::*;

use crate::state::ClaimStatus;

fn account_data(status: &ClaimStatus) -> Vec<u8> {
    let mut data = Vec::with_capacity(ClaimStatus::LEN);
    status.try_serialize(&mut data).unwrap();
    data
}

#[test]
fn test_read_claimed_states() {
    // Not created yet
    assert!(!ClaimStatus::read_claimed(&[]).unwrap());

    // Created, not claimed
    let unclaimed = account_data(&ClaimStatus::default());
    assert!(!ClaimStatus::read_claimed(&unclaimed).unwrap());

    // Claimed
    let mut status = ClaimStatus::default();
    status.mark_claimed(Pubkey::new_unique(), 1000).unwrap();
    let claimed = account_data(&status);
    assert!(ClaimStatus::read_claimed(&claimed).unwrap());
}

#[test]
fn test_read_claimed_rejects_foreign_data() {
    let mut data = account_data(&ClaimStatus::default());
    data[0] ^= 0xff;
    assert!(ClaimStatus::read_claimed(&data).is_err());
}
