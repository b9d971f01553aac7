use borsh::{BorshDeserialize, BorshSerialize};

use crate::error::{Result, ReviewClientError};

/// Size of the backing buffer instructions are encoded into before truncation
pub const INSTRUCTION_BUFFER_LEN: usize = 1000;

// Command discriminants, the first byte of every payload
pub const ADD_REVIEW: u8 = 0;
pub const UPDATE_REVIEW: u8 = 1;
pub const ADD_COMMENT: u8 = 2;

// Ratings the program accepts
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Review fields, in the order the program reads them.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ReviewPayload {
    pub title: String,
    pub rating: u8,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct CommentPayload {
    pub comment: String,
}

// Instructions understood by the movie review program
// Wire format: [command_byte][borsh_serialized_payload]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewInstruction {
    AddReview(ReviewPayload),
    UpdateReview(ReviewPayload),
    AddComment(CommentPayload),
}

impl ReviewInstruction {
    pub fn discriminant(&self) -> u8 {
        match self {
            Self::AddReview(_) => ADD_REVIEW,
            Self::UpdateReview(_) => UPDATE_REVIEW,
            Self::AddComment(_) => ADD_COMMENT,
        }
    }

    /// Exact number of bytes `pack_into` writes for this instruction.
    pub fn packed_len(&self) -> Result<usize> {
        let payload_len = match self {
            Self::AddReview(payload) | Self::UpdateReview(payload) => {
                borsh::object_length(payload)
            }
            Self::AddComment(payload) => borsh::object_length(payload),
        }
        .map_err(|e| ReviewClientError::SchemaMismatch(e.to_string()))?;
        Ok(1 + payload_len)
    }

    /// Encodes into `buffer` and returns the span used.
    ///
    /// Fails with `EncodingOverflow` before writing anything when the
    /// buffer cannot hold the whole instruction.
    pub fn pack_into(&self, buffer: &mut [u8]) -> Result<usize> {
        let required = self.packed_len()?;
        if required > buffer.len() {
            return Err(ReviewClientError::EncodingOverflow {
                required,
                capacity: buffer.len(),
            });
        }

        buffer[0] = self.discriminant();
        let capacity = buffer.len();
        let mut cursor = &mut buffer[1..required];
        let written = match self {
            Self::AddReview(payload) | Self::UpdateReview(payload) => {
                payload.serialize(&mut cursor)
            }
            Self::AddComment(payload) => payload.serialize(&mut cursor),
        };
        written.map_err(|_| ReviewClientError::EncodingOverflow { required, capacity })?;

        Ok(required)
    }

    /// Encodes into a fresh `INSTRUCTION_BUFFER_LEN` buffer and returns only
    /// the bytes the schema covers.
    pub fn pack(&self) -> Result<Vec<u8>> {
        let mut buffer = [0u8; INSTRUCTION_BUFFER_LEN];
        let span = self.pack_into(&mut buffer)?;
        Ok(buffer[..span].to_vec())
    }

    // Inverse of `pack`; trailing bytes are rejected
    pub fn unpack(input: &[u8]) -> Result<Self> {
        let (&command, rest) = input
            .split_first()
            .ok_or_else(|| ReviewClientError::SchemaMismatch("empty instruction data".into()))?;

        let invalid = |e: std::io::Error| ReviewClientError::SchemaMismatch(e.to_string());
        Ok(match command {
            ADD_REVIEW => Self::AddReview(ReviewPayload::try_from_slice(rest).map_err(invalid)?),
            UPDATE_REVIEW => {
                Self::UpdateReview(ReviewPayload::try_from_slice(rest).map_err(invalid)?)
            }
            ADD_COMMENT => {
                Self::AddComment(CommentPayload::try_from_slice(rest).map_err(invalid)?)
            }
            other => {
                return Err(ReviewClientError::SchemaMismatch(format!(
                    "unknown command {other}"
                )));
            }
        })
    }
}
