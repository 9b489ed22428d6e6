use anchor_lang::prelude::*;

use crate::error::AirdropError;
use crate::utils::{ClaimRecord, TokenLedger};

use super::runtime::{anchor_error, ranked, TestAirdrop};

struct Fixture {
    admin: Pubkey,
    alice: ClaimRecord,
    bob: ClaimRecord,
    airdrop: TestAirdrop,
}

/// Two ranked recipients, 1000 and 800, root committed by the admin
fn setup(pool: u64) -> Fixture {
    let admin = Pubkey::new_unique();
    let alice = ranked(Pubkey::new_unique(), 1, 1000);
    let bob = ranked(Pubkey::new_unique(), 2, 800);

    let mut airdrop = TestAirdrop::new(admin, None, None, pool);
    let root = airdrop.tree(&[alice.clone(), bob.clone()]).root();
    airdrop.airdrop.set_root(root, &admin).unwrap();

    Fixture {
        admin,
        alice,
        bob,
        airdrop,
    }
}

#[test]
fn test_claim_pays_once() {
    let Fixture {
        alice,
        bob,
        mut airdrop,
        ..
    } = setup(2000);
    let tree = airdrop.tree(&[alice.clone(), bob.clone()]);
    let alice_proof = airdrop.proof(&tree, &alice);
    let alice_leaf = airdrop.leaf(&alice);

    assert!(!airdrop.is_claimed(&alice_leaf));

    let receipt = airdrop
        .claim(alice.recipient, &alice, &alice_proof)
        .unwrap();
    assert_eq!(receipt.recipient, alice.recipient);
    assert_eq!(receipt.rank, Some(1));
    assert_eq!(receipt.amount, 1000);
    assert_eq!(airdrop.ledger.balance_of(&alice.recipient), 1000);
    assert!(airdrop.is_claimed(&alice_leaf));
    assert_eq!(airdrop.events, vec![receipt]);

    // Second claim with identical inputs
    let err = airdrop
        .claim(alice.recipient, &alice, &alice_proof)
        .unwrap_err();
    assert_eq!(err, anchor_error(AirdropError::AlreadyClaimed));
    assert_eq!(airdrop.ledger.balance_of(&alice.recipient), 1000);
    assert_eq!(airdrop.events.len(), 1);

    // Bob cannot reuse Alice's proof
    let err = airdrop.claim(bob.recipient, &bob, &alice_proof).unwrap_err();
    assert_eq!(err, anchor_error(AirdropError::InvalidProof));
    assert_eq!(airdrop.ledger.balance_of(&bob.recipient), 0);

    let bob_proof = airdrop.proof(&tree, &bob);
    airdrop.claim(bob.recipient, &bob, &bob_proof).unwrap();
    assert_eq!(airdrop.ledger.balance_of(&bob.recipient), 800);
    assert_eq!(airdrop.ledger.pool, 200);
    assert_eq!(airdrop.airdrop.total_claimed, 1800);
    assert_eq!(airdrop.airdrop.claim_count, 2);
}

#[test]
fn test_near_miss_records_are_rejected() {
    let Fixture {
        alice,
        bob,
        mut airdrop,
        ..
    } = setup(2000);
    let tree = airdrop.tree(&[alice.clone(), bob.clone()]);
    let proof = airdrop.proof(&tree, &alice);

    let inflated = ClaimRecord {
        amount: 2000,
        ..alice.clone()
    };
    let err = airdrop.claim(alice.recipient, &inflated, &proof).unwrap_err();
    assert_eq!(err, anchor_error(AirdropError::InvalidProof));

    let mut extended = proof.clone();
    extended.push([1; 32]);
    let err = airdrop.claim(alice.recipient, &alice, &extended).unwrap_err();
    assert_eq!(err, anchor_error(AirdropError::InvalidProof));

    let err = airdrop.claim(alice.recipient, &alice, &[]).unwrap_err();
    assert_eq!(err, anchor_error(AirdropError::InvalidProof));

    assert!(airdrop.statuses.values().all(|status| !status.claimed));
    assert_eq!(airdrop.ledger.pool, 2000);
}

#[test]
fn test_claim_rejects_mismatched_leaf() {
    let Fixture {
        alice,
        bob,
        mut airdrop,
        ..
    } = setup(2000);
    let tree = airdrop.tree(&[alice.clone(), bob.clone()]);
    let proof = airdrop.proof(&tree, &alice);
    let bob_leaf = airdrop.leaf(&bob);

    let err = airdrop
        .claim_with_leaf(alice.recipient, bob_leaf, &alice, &proof)
        .unwrap_err();
    assert_eq!(err, anchor_error(AirdropError::LeafMismatch));
    assert!(!airdrop.is_claimed(&bob_leaf));
}

#[test]
fn test_claim_is_bound_to_recipient() {
    let Fixture {
        alice,
        bob,
        mut airdrop,
        ..
    } = setup(2000);
    let tree = airdrop.tree(&[alice.clone(), bob.clone()]);
    let proof = airdrop.proof(&tree, &alice);

    let err = airdrop.claim(bob.recipient, &alice, &proof).unwrap_err();
    assert_eq!(err, anchor_error(AirdropError::IdentityMismatch));
    assert!(!airdrop.is_claimed(&airdrop.leaf(&alice)));
    assert_eq!(airdrop.ledger.balance_of(&bob.recipient), 0);
}

#[test]
fn test_proof_is_checked_before_claimed_flag() {
    let Fixture {
        alice,
        bob,
        mut airdrop,
        ..
    } = setup(2000);
    let tree = airdrop.tree(&[alice.clone(), bob.clone()]);
    let proof = airdrop.proof(&tree, &alice);
    airdrop.claim(alice.recipient, &alice, &proof).unwrap();

    let err = airdrop.claim(alice.recipient, &alice, &[]).unwrap_err();
    assert_eq!(err, anchor_error(AirdropError::InvalidProof));
}

#[test]
fn test_failed_transfer_rolls_back_claim() {
    let Fixture {
        alice,
        bob,
        mut airdrop,
        ..
    } = setup(500);
    let tree = airdrop.tree(&[alice.clone(), bob.clone()]);
    let proof = airdrop.proof(&tree, &alice);

    let err = airdrop.claim(alice.recipient, &alice, &proof).unwrap_err();
    assert_eq!(err, anchor_error(AirdropError::TransferFailed));
    assert!(!airdrop.is_claimed(&airdrop.leaf(&alice)));
    assert_eq!(airdrop.airdrop.total_claimed, 0);
    assert_eq!(airdrop.ledger.pool_balance(), 500);
    assert!(airdrop.events.is_empty());

    // Once funded, the same claim goes through
    airdrop.ledger.pool = 2000;
    airdrop.claim(alice.recipient, &alice, &proof).unwrap();
    assert_eq!(airdrop.ledger.balance_of(&alice.recipient), 1000);
}

#[test]
fn test_claim_requires_root() {
    let admin = Pubkey::new_unique();
    let alice = ranked(Pubkey::new_unique(), 1, 1000);
    let mut airdrop = TestAirdrop::new(admin, None, None, 2000);

    let err = airdrop.claim(alice.recipient, &alice, &[]).unwrap_err();
    assert_eq!(err, anchor_error(AirdropError::NoMerkleRoot));
}

#[test]
fn test_zero_amount_record_is_rejected() {
    let admin = Pubkey::new_unique();
    let alice = ranked(Pubkey::new_unique(), 1, 0);
    let mut airdrop = TestAirdrop::new(admin, None, None, 2000);
    let root = airdrop.tree(&[alice.clone()]).root();
    airdrop.airdrop.set_root(root, &admin).unwrap();

    let err = airdrop.claim(alice.recipient, &alice, &[]).unwrap_err();
    assert_eq!(err, anchor_error(AirdropError::InvalidAmount));
    assert!(!airdrop.is_claimed(&root));
}

#[test]
fn test_fixed_reward_ignores_record_amount() {
    let admin = Pubkey::new_unique();
    let users: Vec<ClaimRecord> = (0..10)
        .map(|_| ClaimRecord {
            recipient: Pubkey::new_unique(),
            rank: None,
            amount: 0,
        })
        .collect();

    let mut airdrop = TestAirdrop::new(admin, None, Some(100), 10_000);
    let tree = airdrop.tree(&users);
    airdrop.airdrop.set_root(tree.root(), &admin).unwrap();

    for user in &users {
        let proof = airdrop.proof(&tree, user);
        let greedy = ClaimRecord {
            amount: 5_000,
            ..user.clone()
        };
        let receipt = airdrop.claim(user.recipient, &greedy, &proof).unwrap();
        assert_eq!(receipt.amount, 100);
        assert_eq!(airdrop.ledger.balance_of(&user.recipient), 100);
    }

    for user in &users {
        let proof = airdrop.proof(&tree, user);
        let err = airdrop.claim(user.recipient, user, &proof).unwrap_err();
        assert_eq!(err, anchor_error(AirdropError::AlreadyClaimed));
    }

    assert_eq!(airdrop.airdrop.total_claimed, 1000);
    assert_eq!(airdrop.ledger.pool, 9_000);
}

#[test]
fn test_root_rotation_keeps_claimed_set() {
    let Fixture {
        admin,
        alice,
        bob,
        mut airdrop,
    } = setup(5000);
    let first = airdrop.tree(&[alice.clone(), bob.clone()]);
    let alice_proof = airdrop.proof(&first, &alice);
    let bob_proof = airdrop.proof(&first, &bob);
    airdrop.claim(alice.recipient, &alice, &alice_proof).unwrap();

    // New eligibility set: Alice stays, Bob is dropped, Carol is added
    let carol = ranked(Pubkey::new_unique(), 3, 300);
    let second = airdrop.tree(&[alice.clone(), carol.clone()]);
    airdrop.airdrop.set_root(second.root(), &admin).unwrap();

    assert!(airdrop.is_claimed(&airdrop.leaf(&alice)));
    assert!(!airdrop.is_claimed(&airdrop.leaf(&bob)));

    let alice_proof = airdrop.proof(&second, &alice);
    let err = airdrop
        .claim(alice.recipient, &alice, &alice_proof)
        .unwrap_err();
    assert_eq!(err, anchor_error(AirdropError::AlreadyClaimed));

    let err = airdrop.claim(bob.recipient, &bob, &bob_proof).unwrap_err();
    assert_eq!(err, anchor_error(AirdropError::InvalidProof));

    let carol_proof = airdrop.proof(&second, &carol);
    airdrop.claim(carol.recipient, &carol, &carol_proof).unwrap();

    assert_eq!(airdrop.ledger.balance_of(&alice.recipient), 1000);
    assert_eq!(airdrop.ledger.balance_of(&bob.recipient), 0);
    assert_eq!(airdrop.ledger.balance_of(&carol.recipient), 300);
}

#[test]
fn test_fixed_reward_reports_no_rank() {
    let admin = Pubkey::new_unique();
    let user = ClaimRecord {
        recipient: Pubkey::new_unique(),
        rank: None,
        amount: 0,
    };
    let mut airdrop = TestAirdrop::new(admin, None, Some(100), 1_000);
    let root = airdrop.tree(&[user.clone()]).root();
    airdrop.airdrop.set_root(root, &admin).unwrap();

    let tagged = ClaimRecord {
        rank: Some(1),
        ..user.clone()
    };
    let receipt = airdrop.claim(user.recipient, &tagged, &[]).unwrap();
    assert_eq!(receipt.rank, None);
    assert_eq!(receipt.amount, 100);
    assert_eq!(airdrop.events[0].rank, None);
}
