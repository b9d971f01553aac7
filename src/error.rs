use thiserror::Error;

// Errors surfaced by the movie review client
// Every failure is returned to the caller unchanged; nothing here retries
#[derive(Debug, Error)]
pub enum ReviewClientError {
    #[error("Instruction needs {required} bytes but the buffer holds {capacity}")]
    EncodingOverflow { required: usize, capacity: usize },

    #[error("Rating must be in range 1~5, got {0}")]
    InvalidRating(u8),

    #[error("Instruction data does not match the command schema: {0}")]
    SchemaMismatch(String),

    #[error("No valid bump seed found for the given seeds")]
    DerivationExhausted,

    #[error("Invalid PDA seeds: {0}")]
    InvalidSeeds(String),

    #[error("Address derivation task failed")]
    DerivationTask(#[from] tokio::task::JoinError),

    #[error("Transaction rejected by the network: {0}")]
    SubmissionRejected(String),

    #[error("Failed to fetch account {address}: {reason}")]
    AccountFetch { address: String, reason: String },

    #[error("Invalid program id {0}")]
    InvalidProgramId(String),

    #[error("Account data could not be decoded: {0}")]
    InvalidAccountData(String),
}

pub type Result<T> = std::result::Result<T, ReviewClientError>;
