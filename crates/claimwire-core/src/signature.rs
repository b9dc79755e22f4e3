//! Signature splitter.
//!
//! Works on wire bytes: finds the signature block the envelope located, cuts
//! it out, or frames a new one in. Payload fields are never re-encoded here,
//! so the signable bytes are exactly the bytes that were (or will be) signed.

use claimwire_schema::legacy;
use prost::Message;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::envelope::{
    parse_envelope, wrap, ClaimVersion, Generation, CHANNEL_HASH_LEN, V2_SIGNATURE_LEN,
    V2_UNSIGNED_MARKER,
};
use crate::error::{ClaimError, PayloadError};
use crate::pubkey::KeyType;
use crate::types::ClaimId;

/// Version written into first-generation signature messages.
const SIGNATURE_MESSAGE_VERSION: i32 = 1;

/// A publisher signature over a claim's signable payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureBlock {
    pub key_type: KeyType,
    /// Raw `r || s`.
    pub signature: Vec<u8>,
    /// Claim id of the signing channel.
    pub channel_id: ClaimId,
}

impl SignatureBlock {
    pub fn new(key_type: KeyType, signature: Vec<u8>, channel_id: ClaimId) -> Self {
        Self {
            key_type,
            signature,
            channel_id,
        }
    }

    /// A secp256k1 block, the only kind second-generation claims carry.
    pub fn secp256k1(signature: [u8; V2_SIGNATURE_LEN], channel_id: ClaimId) -> Self {
        Self::new(KeyType::Secp256k1, signature.to_vec(), channel_id)
    }

    /// Parse the raw block located by the envelope.
    pub(crate) fn from_wire(generation: Generation, raw: &[u8]) -> Result<Self, ClaimError> {
        match generation {
            Generation::V1 => {
                let message = legacy::Signature::decode(raw)
                    .map_err(|e| ClaimError::schema("signature", e))?;
                if message.encode_to_vec() != raw {
                    return Err(ClaimError::schema("signature", PayloadError::NonCanonical));
                }
                if message.version != SIGNATURE_MESSAGE_VERSION {
                    return Err(ClaimError::schema(
                        "signature",
                        PayloadError::Invalid("unsupported signature message version"),
                    ));
                }
                let key_type = KeyType::from_code(message.signature_type).ok_or_else(|| {
                    ClaimError::schema("signature", PayloadError::Invalid("unknown signature type"))
                })?;
                let channel_id = ClaimId::try_from(message.certificate_id.as_slice()).map_err(|_| {
                    ClaimError::schema(
                        "signature",
                        PayloadError::Invalid("certificate id is not 20 bytes"),
                    )
                })?;
                Ok(Self::new(key_type, message.signature, channel_id))
            }
            Generation::V2 => {
                if raw.len() != CHANNEL_HASH_LEN + V2_SIGNATURE_LEN {
                    return Err(ClaimError::InvalidSignatureBlock {
                        reason: "signature header has the wrong length",
                    });
                }
                let (hash, signature) = raw.split_at(CHANNEL_HASH_LEN);
                let mut claim_hash = [0u8; CHANNEL_HASH_LEN];
                claim_hash.copy_from_slice(hash);
                Ok(Self::new(
                    KeyType::Secp256k1,
                    signature.to_vec(),
                    ClaimId::from_claim_hash(claim_hash),
                ))
            }
        }
    }

    /// Body of field 5 in a flat envelope.
    pub(crate) fn encode_v1(&self) -> Vec<u8> {
        legacy::Signature {
            version: SIGNATURE_MESSAGE_VERSION,
            signature_type: self.key_type.code(),
            signature: self.signature.clone(),
            certificate_id: self.channel_id.as_bytes().to_vec(),
        }
        .encode_to_vec()
    }

    /// Check that this block can be framed into a `generation` claim.
    pub fn check_for(&self, generation: Generation) -> Result<(), ClaimError> {
        if self.signature.is_empty() {
            return Err(ClaimError::InvalidSignatureBlock {
                reason: "signature is empty",
            });
        }
        if generation == Generation::V2 {
            if self.key_type != KeyType::Secp256k1 {
                return Err(ClaimError::InvalidSignatureBlock {
                    reason: "second-generation claims only carry secp256k1 signatures",
                });
            }
            if self.signature.len() != V2_SIGNATURE_LEN {
                return Err(ClaimError::InvalidSignatureBlock {
                    reason: "second-generation signatures are 64 bytes",
                });
            }
        }
        Ok(())
    }
}

/// Remove the signature block from a claim's bytes.
///
/// Unsigned and legacy claims come back unchanged, so stripping is idempotent.
/// For the flat envelope the trailing field is cut; for the prefixed envelope
/// the header collapses to the unsigned marker.
pub fn strip_signature(bytes: &[u8]) -> Result<Vec<u8>, ClaimError> {
    let envelope = parse_envelope(bytes)?;
    let Some(span) = envelope.signature_span else {
        return Ok(bytes.to_vec());
    };

    let mut out = Vec::with_capacity(bytes.len() - span.len());
    out.extend_from_slice(&bytes[..span.start]);
    out.extend_from_slice(&bytes[span.end..]);
    if envelope.generation == Generation::V2 {
        out[0] = V2_UNSIGNED_MARKER;
    }
    trace!(removed = span.len(), "stripped signature block");
    Ok(out)
}

/// Frame `block` into an unsigned claim. Inverse of [`strip_signature`].
pub fn attach_signature(unsigned: &[u8], block: &SignatureBlock) -> Result<Vec<u8>, ClaimError> {
    let envelope = parse_envelope(unsigned)?;
    match envelope.version {
        ClaimVersion::Unsigned => {}
        ClaimVersion::Signed => {
            return Err(ClaimError::InvalidSignatureBlock {
                reason: "claim is already signed",
            })
        }
        ClaimVersion::Legacy => return Err(ClaimError::LegacyReadOnly { field: "signature" }),
    }
    block.check_for(envelope.generation)?;
    Ok(wrap(
        envelope.generation,
        envelope.variant,
        envelope.payload,
        Some(block),
    ))
}

/// The bytes a signature covers: the unsigned wire form of the claim.
///
/// First-generation signatures cover the whole unsigned envelope;
/// second-generation ones cover only the protobuf payload.
pub fn signable_bytes(bytes: &[u8]) -> Result<Vec<u8>, ClaimError> {
    let envelope = parse_envelope(bytes)?;
    Ok(match envelope.generation {
        Generation::V1 => match envelope.signature_span {
            Some(span) => bytes[..span.start].to_vec(),
            None => bytes.to_vec(),
        },
        Generation::V2 => envelope.payload.to_vec(),
    })
}
