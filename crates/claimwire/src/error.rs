//! Error types for the codec API.

use claimwire_core::ClaimError;
use thiserror::Error;

/// Errors that can occur during codec operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Decode, compile or signature error from the core.
    #[error(transparent)]
    Claim(#[from] ClaimError),

    /// Input or output exceeds the configured claim size.
    #[error("claim is {len} bytes, limit is {max}")]
    TooLarge { len: usize, max: usize },
}

impl Error {
    /// Whether more input might turn this failure into a success.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Claim(e) => e.is_retryable(),
            Error::TooLarge { .. } => false,
        }
    }
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
