use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::program_pack::{IsInitialized, Sealed};

use crate::error::{Result, ReviewClientError};

// Review account layout as written by the program into the review PDA
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ReviewState {
    pub is_initialized: bool,
    pub rating: u8,
    pub description: String,
    pub title: String,
}

// Comment counter PDA, one per review
// `counter` is the number of comments created so far, which is also the
// index the next comment PDA is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, BorshSerialize, BorshDeserialize)]
pub struct CommentCounterState {
    pub is_initialized: bool,
    pub counter: u64,
}

impl Sealed for ReviewState {}
impl Sealed for CommentCounterState {}

impl IsInitialized for ReviewState {
    fn is_initialized(&self) -> bool {
        self.is_initialized
    }
}

impl IsInitialized for CommentCounterState {
    fn is_initialized(&self) -> bool {
        self.is_initialized
    }
}

/// Decodes a borsh record from the front of an account's data.
///
/// Accounts are allocated larger than their contents, so unlike
/// `try_from_slice` the zero-filled tail is ignored.
pub fn decode_account<T: BorshDeserialize>(data: &[u8]) -> Result<T> {
    T::deserialize(&mut &data[..]).map_err(|e| ReviewClientError::InvalidAccountData(e.to_string()))
}

impl CommentCounterState {
    /// Index the next comment will be created at. Uninitialized counters
    /// have no comments yet.
    pub fn next_index(&self) -> u64 {
        if self.is_initialized { self.counter } else { 0 }
    }
}
