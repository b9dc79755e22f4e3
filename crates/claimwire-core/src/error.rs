//! Error types for the claim codec.

use thiserror::Error;

use crate::envelope::ClaimVariant;

/// Errors produced while decoding, compiling or editing claims.
///
/// Every decode and compile path returns either a complete value or one of
/// these; there is no partial-decode mode.
#[derive(Debug, Error)]
pub enum ClaimError {
    /// The bytes do not match any known envelope layout. Not retryable.
    #[error("malformed envelope at byte {offset}: {reason}")]
    MalformedEnvelope { offset: usize, reason: &'static str },

    /// A valid prefix ended before a declared structure was complete.
    #[error("truncated input at byte {offset}: {needed} more byte(s) required")]
    TruncatedInput { offset: usize, needed: usize },

    /// The envelope is valid but names a content variant this codec does not know.
    #[error("unknown claim variant tag {tag}")]
    UnknownVariant { tag: u64 },

    #[error("invalid public key encoding: {reason}")]
    InvalidKeyEncoding { reason: String },

    /// The payload schema rejected a sub-message.
    #[error("schema rejected {field}: {source}")]
    SchemaPayload {
        field: &'static str,
        #[source]
        source: PayloadError,
    },

    #[error("variant mismatch: operation needs a {expected} claim, record is a {actual} claim")]
    VariantMismatch {
        expected: ClaimVariant,
        actual: ClaimVariant,
    },

    /// Payload mutators refuse first-generation records; upgrade them first.
    #[error("legacy claims are read-only: cannot modify {field}")]
    LegacyReadOnly { field: &'static str },

    #[error("invalid signature block: {reason}")]
    InvalidSignatureBlock { reason: &'static str },

    #[error("signature does not verify against the channel key")]
    SignatureMismatch,

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid address: {reason}")]
    InvalidAddress { reason: String },
}

impl ClaimError {
    /// Whether more input might turn this failure into a success.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClaimError::TruncatedInput { .. })
    }

    pub(crate) fn schema(field: &'static str, source: impl Into<PayloadError>) -> Self {
        ClaimError::SchemaPayload {
            field,
            source: source.into(),
        }
    }
}

/// Why the payload schema rejected a sub-message.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error(transparent)]
    Decode(#[from] prost::DecodeError),

    /// Re-encoding the decoded message would not reproduce the input bytes
    /// (unknown fields, reordered fields, non-minimal varints).
    #[error("payload is not canonically encoded")]
    NonCanonical,

    #[error("{0}")]
    Invalid(&'static str),
}
