// Tests for PDA derivation
// Addresses are checked against Pubkey::find_program_address with the raw seeds

use movie_review_client::{
    ReviewClientError,
    pda::{
        COMMENT_SEED, derive_address, derive_address_async, find_comment_address,
        find_comment_counter_address, find_review_address, find_review_address_async,
    },
};
use solana_program::pubkey::Pubkey;
use std::str::FromStr;

const PROGRAM_ID: &str = "Fm4FXYj8mbBzHnwq1V7Yh5cP9TqrGJSqYdHZ3u2KLxRV";
const TITLE: &str = "Can I make a comment?";

fn program_id() -> Pubkey {
    Pubkey::from_str(PROGRAM_ID).unwrap()
}

#[test]
fn test_review_address_is_deterministic() {
    let owner = Pubkey::new_unique();

    let first = find_review_address(&program_id(), &owner, TITLE).unwrap();
    let second = find_review_address(&program_id(), &owner, TITLE).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_review_address_matches_sdk_derivation() {
    let owner = Pubkey::new_unique();

    let expected = Pubkey::find_program_address(&[owner.as_ref(), TITLE.as_bytes()], &program_id());

    assert_eq!(find_review_address(&program_id(), &owner, TITLE).unwrap(), expected);
    assert!(!expected.0.is_on_curve());
}

/// Each (owner, title) pair gets its own review PDA
#[test]
fn test_review_address_depends_on_owner_and_title() {
    let alice = Pubkey::new_unique();
    let bob = Pubkey::new_unique();

    let (alice_review, _) = find_review_address(&program_id(), &alice, TITLE).unwrap();
    let (bob_review, _) = find_review_address(&program_id(), &bob, TITLE).unwrap();
    let (alice_other, _) = find_review_address(&program_id(), &alice, "Another title").unwrap();

    assert_ne!(alice_review, bob_review);
    assert_ne!(alice_review, alice_other);
}

#[test]
fn test_comment_addresses_match_sdk_derivation() {
    let review = Pubkey::new_unique();

    let counter = Pubkey::find_program_address(&[review.as_ref(), b"comment"], &program_id());
    assert_eq!(find_comment_counter_address(&program_id(), &review).unwrap(), counter);
    assert_eq!(COMMENT_SEED, b"comment");

    // Comment index is encoded as 8 big-endian bytes
    let index_one = Pubkey::find_program_address(
        &[review.as_ref(), &[0, 0, 0, 0, 0, 0, 0, 1]],
        &program_id(),
    );
    assert_eq!(find_comment_address(&program_id(), &review, 1).unwrap(), index_one);

    let (first, _) = find_comment_address(&program_id(), &review, 0).unwrap();
    let (second, _) = find_comment_address(&program_id(), &review, 1).unwrap();
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_async_derivation_matches_sync() {
    let owner = Pubkey::new_unique();

    let sync = find_review_address(&program_id(), &owner, TITLE).unwrap();
    let derived = find_review_address_async(&program_id(), &owner, TITLE).await.unwrap();
    assert_eq!(derived, sync);

    let raw = derive_address_async(
        program_id(),
        vec![owner.to_bytes().to_vec(), TITLE.as_bytes().to_vec()],
    )
    .await
    .unwrap();
    assert_eq!(raw, sync);
}

/// Seeds longer than 32 bytes cannot be used for a PDA
#[test]
fn test_long_seed_rejected() {
    let owner = Pubkey::new_unique();
    let title = "A title that is far too long to be a seed";
    assert!(title.len() > 32);

    let result = find_review_address(&program_id(), &owner, title);
    assert!(matches!(result, Err(ReviewClientError::InvalidSeeds(_))), "got {result:?}");
}

#[test]
fn test_too_many_seeds_rejected() {
    let seed = [7u8; 4];
    let seeds: Vec<&[u8]> = (0..16).map(|_| seed.as_slice()).collect();

    let result = derive_address(&program_id(), &seeds);
    assert!(matches!(result, Err(ReviewClientError::InvalidSeeds(_))), "got {result:?}");

    // 15 caller seeds plus the bump is still within the limit
    assert!(derive_address(&program_id(), &seeds[..15]).is_ok());
}

#[test]
fn test_seed_of_exactly_32_bytes_accepted() {
    let title = "x".repeat(32);
    let owner = Pubkey::new_unique();

    let expected = Pubkey::find_program_address(&[owner.as_ref(), title.as_bytes()], &program_id());
    assert_eq!(find_review_address(&program_id(), &owner, &title).unwrap(), expected);
}
