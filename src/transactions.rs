use log::{debug, info};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_pack::IsInitialized,
    pubkey::Pubkey,
};
use solana_sdk::signature::Signature;
use solana_system_interface::program as system_program;

use crate::{
    error::{Result, ReviewClientError},
    instruction::{CommentPayload, MAX_RATING, MIN_RATING, ReviewInstruction, ReviewPayload},
    network::Network,
    pda::{
        find_comment_address, find_comment_counter_address, find_review_address,
        find_review_address_async,
    },
    state::{CommentCounterState, ReviewState, decode_account},
    wallet::Wallet,
};

fn check_rating(rating: u8) -> Result<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ReviewClientError::InvalidRating(rating));
    }
    Ok(())
}

// Accounts for AddReview / UpdateReview, in the order the program reads them:
// owner (signer), review PDA (writable), system program
fn review_instruction(
    program_id: &Pubkey,
    owner: &Pubkey,
    review_address: &Pubkey,
    review: ReviewPayload,
    command: fn(ReviewPayload) -> ReviewInstruction,
) -> Result<Instruction> {
    check_rating(review.rating)?;
    let instruction = command(review);
    let data = instruction.pack()?;
    debug!(
        "encoded command {} into {} bytes",
        instruction.discriminant(),
        data.len()
    );

    Ok(Instruction::new_with_bytes(
        *program_id,
        &data,
        vec![
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new(*review_address, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
    ))
}

// Accounts for AddComment:
// owner (signer), review PDA, counter PDA, comment PDA (all writable), system program
fn comment_instruction(
    program_id: &Pubkey,
    owner: &Pubkey,
    review_address: &Pubkey,
    index: u64,
    payload: CommentPayload,
) -> Result<Instruction> {
    let (counter_address, _) = find_comment_counter_address(program_id, review_address)?;
    let (comment_address, _) = find_comment_address(program_id, review_address, index)?;

    let instruction = ReviewInstruction::AddComment(payload);
    let data = instruction.pack()?;
    debug!("encoded comment #{index} into {} bytes", data.len());

    Ok(Instruction::new_with_bytes(
        *program_id,
        &data,
        vec![
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new(*review_address, false),
            AccountMeta::new(counter_address, false),
            AccountMeta::new(comment_address, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
    ))
}

pub fn add_review_instruction(
    program_id: &Pubkey,
    owner: &Pubkey,
    review: ReviewPayload,
) -> Result<Instruction> {
    let (review_address, _) = find_review_address(program_id, owner, &review.title)?;
    review_instruction(program_id, owner, &review_address, review, ReviewInstruction::AddReview)
}

pub fn update_review_instruction(
    program_id: &Pubkey,
    owner: &Pubkey,
    review: ReviewPayload,
) -> Result<Instruction> {
    let (review_address, _) = find_review_address(program_id, owner, &review.title)?;
    review_instruction(program_id, owner, &review_address, review, ReviewInstruction::UpdateReview)
}

/// Builds an AddComment instruction for the comment at `index` on the
/// review `owner` wrote under `title`.
pub fn add_comment_instruction(
    program_id: &Pubkey,
    owner: &Pubkey,
    title: &str,
    comment: &str,
    index: u64,
) -> Result<Instruction> {
    let (review_address, _) = find_review_address(program_id, owner, title)?;
    comment_instruction(
        program_id,
        owner,
        &review_address,
        index,
        CommentPayload { comment: comment.to_string() },
    )
}

/// Creates a review and returns the confirmed transaction signature.
pub async fn add_review<N: Network>(
    wallet: &Wallet<N>,
    program_id: &Pubkey,
    title: &str,
    rating: u8,
    description: &str,
) -> Result<Signature> {
    let owner = wallet.pubkey();
    let (review_address, _) = find_review_address_async(program_id, &owner, title).await?;
    info!("adding review {title:?} at {review_address}");

    let review = ReviewPayload {
        title: title.to_string(),
        rating,
        description: description.to_string(),
    };
    let instruction = review_instruction(
        program_id,
        &owner,
        &review_address,
        review,
        ReviewInstruction::AddReview,
    )?;
    wallet.network.submit(&[instruction], &wallet.keypair).await
}

/// Rewrites the rating and description of an existing review.
pub async fn update_review<N: Network>(
    wallet: &Wallet<N>,
    program_id: &Pubkey,
    title: &str,
    rating: u8,
    description: &str,
) -> Result<Signature> {
    let owner = wallet.pubkey();
    let (review_address, _) = find_review_address_async(program_id, &owner, title).await?;
    info!("updating review {title:?} at {review_address}");

    let review = ReviewPayload {
        title: title.to_string(),
        rating,
        description: description.to_string(),
    };
    let instruction = review_instruction(
        program_id,
        &owner,
        &review_address,
        review,
        ReviewInstruction::UpdateReview,
    )?;
    wallet.network.submit(&[instruction], &wallet.keypair).await
}

/// Comments on the wallet owner's review titled `title`.
///
/// The comment PDA is derived from the review's current comment count, read
/// from its counter account. A review with no counter account yet gets its
/// first comment at index 0.
pub async fn add_comment<N: Network>(
    wallet: &Wallet<N>,
    program_id: &Pubkey,
    title: &str,
    comment: &str,
) -> Result<Signature> {
    let owner = wallet.pubkey();
    let (review_address, _) = find_review_address_async(program_id, &owner, title).await?;
    let index = comment_count(wallet, program_id, &review_address).await?;
    info!("adding comment #{index} to review {title:?} at {review_address}");

    let instruction = comment_instruction(
        program_id,
        &owner,
        &review_address,
        index,
        CommentPayload { comment: comment.to_string() },
    )?;
    wallet.network.submit(&[instruction], &wallet.keypair).await
}

/// Data of `address` if it is an account `program_id` has written to.
///
/// Missing accounts, accounts owned by another program (such as a PDA that
/// was only sent lamports) and empty accounts all read as `None`.
async fn program_account_data<N: Network>(
    wallet: &Wallet<N>,
    program_id: &Pubkey,
    address: &Pubkey,
) -> Result<Option<Vec<u8>>> {
    Ok(wallet
        .network
        .account(address)
        .await?
        .filter(|account| account.owner == *program_id && !account.data.is_empty())
        .map(|account| account.data))
}

/// Number of comments recorded by the counter account of `review_address`.
pub async fn comment_count<N: Network>(
    wallet: &Wallet<N>,
    program_id: &Pubkey,
    review_address: &Pubkey,
) -> Result<u64> {
    let (counter_address, _) = find_comment_counter_address(program_id, review_address)?;
    match program_account_data(wallet, program_id, &counter_address).await? {
        Some(data) => Ok(decode_account::<CommentCounterState>(&data)?.next_index()),
        None => Ok(0),
    }
}

/// Reads back the wallet owner's review titled `title`, if it exists.
pub async fn fetch_review<N: Network>(
    wallet: &Wallet<N>,
    program_id: &Pubkey,
    title: &str,
) -> Result<Option<ReviewState>> {
    let (review_address, _) = find_review_address(program_id, &wallet.pubkey(), title)?;
    let Some(data) = program_account_data(wallet, program_id, &review_address).await? else {
        return Ok(None);
    };
    let review = decode_account::<ReviewState>(&data)?;
    Ok(review.is_initialized().then_some(review))
}
