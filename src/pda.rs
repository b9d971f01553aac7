//! PDA helpers for deriving movie review program addresses.

use log::debug;
use solana_program::pubkey::Pubkey;

use crate::error::{Result, ReviewClientError};

pub const COMMENT_SEED: &[u8] = b"comment";

/// Maximum length of a single seed.
pub const MAX_SEED_LEN: usize = 32;
/// Seeds a caller may pass; the platform allows 16 including the bump.
pub const MAX_SEEDS: usize = 15;

fn check_seeds(seeds: &[&[u8]]) -> Result<()> {
    if seeds.len() > MAX_SEEDS {
        return Err(ReviewClientError::InvalidSeeds(format!(
            "{} seeds given, at most {MAX_SEEDS} allowed",
            seeds.len()
        )));
    }
    if let Some((index, seed)) = seeds.iter().enumerate().find(|(_, s)| s.len() > MAX_SEED_LEN) {
        return Err(ReviewClientError::InvalidSeeds(format!(
            "seed {index} is {} bytes, at most {MAX_SEED_LEN} allowed",
            seed.len()
        )));
    }
    Ok(())
}

/// Finds the canonical `(address, bump)` for `seeds` under `program_id`,
/// blocking the calling thread for the bump search.
pub fn derive_address(program_id: &Pubkey, seeds: &[&[u8]]) -> Result<(Pubkey, u8)> {
    check_seeds(seeds)?;
    let (address, bump) = Pubkey::try_find_program_address(seeds, program_id)
        .ok_or(ReviewClientError::DerivationExhausted)?;
    debug!("derived {address} (bump {bump}) from {} seeds", seeds.len());
    Ok((address, bump))
}

/// Same search as `derive_address`, run on the blocking pool so the caller
/// can await it.
pub async fn derive_address_async(program_id: Pubkey, seeds: Vec<Vec<u8>>) -> Result<(Pubkey, u8)> {
    tokio::task::spawn_blocking(move || {
        let seeds: Vec<&[u8]> = seeds.iter().map(Vec::as_slice).collect();
        derive_address(&program_id, &seeds)
    })
    .await?
}

// Review PDA: [owner, title]
pub fn find_review_address(
    program_id: &Pubkey,
    owner: &Pubkey,
    title: &str,
) -> Result<(Pubkey, u8)> {
    derive_address(program_id, &[owner.as_ref(), title.as_bytes()])
}

pub async fn find_review_address_async(
    program_id: &Pubkey,
    owner: &Pubkey,
    title: &str,
) -> Result<(Pubkey, u8)> {
    derive_address_async(
        *program_id,
        vec![owner.as_ref().to_vec(), title.as_bytes().to_vec()],
    )
    .await
}

// Comment counter PDA: [review, "comment"]
pub fn find_comment_counter_address(
    program_id: &Pubkey,
    review: &Pubkey,
) -> Result<(Pubkey, u8)> {
    derive_address(program_id, &[review.as_ref(), COMMENT_SEED])
}

// Comment PDA: [review, index as big-endian u64]
pub fn find_comment_address(
    program_id: &Pubkey,
    review: &Pubkey,
    index: u64,
) -> Result<(Pubkey, u8)> {
    derive_address(program_id, &[review.as_ref(), &index.to_be_bytes()])
}
