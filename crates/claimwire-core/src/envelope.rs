//! Version envelope.
//!
//! Recognizes which historical wire layout a byte blob uses and exposes a
//! uniform discriminant before any payload field is interpreted.
//!
//! ```text
//! 0x08 ...                  flat envelope (first generation)
//!                           field 1 version, field 2 claim type,
//!                           field 3 stream | field 4 certificate,
//!                           optional field 5 signature
//! 0x00 payload              second generation, unsigned
//! 0x01 hash[20] sig[64] payload
//!                           second generation, signed
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use tracing::trace;

use crate::error::ClaimError;
use crate::signature::SignatureBlock;
use crate::wire::{read_fields, write_bytes_field, write_varint_field, Field, WireType};

pub const V2_UNSIGNED_MARKER: u8 = 0x00;
pub const V2_SIGNED_MARKER: u8 = 0x01;

/// First byte of a flat envelope: field 1, varint.
pub const FLAT_MARKER: u8 = 0x08;

pub const CHANNEL_HASH_LEN: usize = 20;
pub const V2_SIGNATURE_LEN: usize = 64;

/// Marker, channel hash and signature of a signed second-generation claim.
pub const V2_SIGNED_HEADER_LEN: usize = 1 + CHANNEL_HASH_LEN + V2_SIGNATURE_LEN;

/// Field numbers of the flat envelope.
pub(crate) mod flat {
    pub const VERSION: u32 = 1;
    pub const CLAIM_TYPE: u32 = 2;
    pub const STREAM: u32 = 3;
    pub const CERTIFICATE: u32 = 4;
    pub const SIGNATURE: u32 = 5;

    pub const ENVELOPE_VERSION: u64 = 1;
    pub const STREAM_TYPE: u64 = 1;
    pub const CERTIFICATE_TYPE: u64 = 2;
}

/// Oneof field numbers a future schema may assign to new variants.
const RESERVED_VARIANT_FIELDS: Range<u32> = 5..8;

/// Signature state of a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimVersion {
    /// First-generation certificate. Decode-only, never signed.
    Legacy,
    Unsigned,
    Signed,
}

/// Which wire generation carries the claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Generation {
    /// Flat protobuf envelope.
    V1,
    /// Marker byte, optional signature header, protobuf payload.
    V2,
}

/// Content variant of a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimVariant {
    Stream,
    Channel,
    Collection,
    Repost,
}

impl ClaimVariant {
    /// Oneof field number in the second-generation claim message.
    pub const fn v2_field(self) -> u32 {
        match self {
            ClaimVariant::Stream => 1,
            ClaimVariant::Channel => 2,
            ClaimVariant::Collection => 3,
            ClaimVariant::Repost => 4,
        }
    }

    pub const fn from_v2_field(number: u32) -> Option<Self> {
        match number {
            1 => Some(ClaimVariant::Stream),
            2 => Some(ClaimVariant::Channel),
            3 => Some(ClaimVariant::Collection),
            4 => Some(ClaimVariant::Repost),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ClaimVariant::Stream => "stream",
            ClaimVariant::Channel => "channel",
            ClaimVariant::Collection => "collection",
            ClaimVariant::Repost => "repost",
        }
    }
}

impl fmt::Display for ClaimVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structural view of a claim's bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope<'a> {
    pub generation: Generation,
    pub version: ClaimVersion,
    pub variant: ClaimVariant,
    /// Schema payload. For the flat envelope this is the body of the stream
    /// or certificate field; otherwise everything after the header.
    pub payload: &'a [u8],
    /// Raw signature block: the body of field 5, or hash and signature.
    pub signature: Option<&'a [u8]>,
    /// Byte range occupied by the signature block, including its framing.
    pub signature_span: Option<Range<usize>>,
}

/// Sniff the layout of `bytes` and validate its top-level framing.
pub fn parse_envelope(bytes: &[u8]) -> Result<Envelope<'_>, ClaimError> {
    let Some(&marker) = bytes.first() else {
        return Err(ClaimError::TruncatedInput {
            offset: 0,
            needed: 1,
        });
    };

    let envelope = match marker {
        V2_UNSIGNED_MARKER => parse_prefixed(bytes, 1, None)?,
        V2_SIGNED_MARKER => {
            if bytes.len() < V2_SIGNED_HEADER_LEN {
                return Err(ClaimError::TruncatedInput {
                    offset: bytes.len(),
                    needed: V2_SIGNED_HEADER_LEN - bytes.len(),
                });
            }
            parse_prefixed(bytes, V2_SIGNED_HEADER_LEN, Some(1..V2_SIGNED_HEADER_LEN))?
        }
        FLAT_MARKER => parse_flat(bytes)?,
        _ => {
            return Err(ClaimError::MalformedEnvelope {
                offset: 0,
                reason: "unrecognized envelope marker",
            })
        }
    };

    trace!(
        generation = ?envelope.generation,
        version = ?envelope.version,
        variant = %envelope.variant,
        payload_len = envelope.payload.len(),
        "sniffed envelope"
    );
    Ok(envelope)
}

fn parse_prefixed(
    bytes: &[u8],
    payload_start: usize,
    signature_span: Option<Range<usize>>,
) -> Result<Envelope<'_>, ClaimError> {
    let fields = read_fields(bytes, payload_start)?;

    let mut variant = None;
    let mut reserved = None;
    for field in &fields {
        if let Some(found) = ClaimVariant::from_v2_field(field.number) {
            if field.wire_type != WireType::LengthDelimited {
                return Err(ClaimError::MalformedEnvelope {
                    offset: field.start,
                    reason: "variant field is not length-delimited",
                });
            }
            if variant.is_some() {
                return Err(ClaimError::MalformedEnvelope {
                    offset: field.start,
                    reason: "more than one variant field",
                });
            }
            variant = Some(found);
        } else if RESERVED_VARIANT_FIELDS.contains(&field.number) && reserved.is_none() {
            reserved = Some(field.number);
        }
    }

    let variant = match (variant, reserved) {
        (_, Some(tag)) => return Err(ClaimError::UnknownVariant { tag: u64::from(tag) }),
        (None, None) => return Err(ClaimError::UnknownVariant { tag: 0 }),
        (Some(variant), None) => variant,
    };

    let (version, signature) = match &signature_span {
        Some(span) => (ClaimVersion::Signed, Some(&bytes[span.clone()])),
        None => (ClaimVersion::Unsigned, None),
    };

    Ok(Envelope {
        generation: Generation::V2,
        version,
        variant,
        payload: &bytes[payload_start..],
        signature,
        signature_span,
    })
}

fn parse_flat(bytes: &[u8]) -> Result<Envelope<'_>, ClaimError> {
    let fields = read_fields(bytes, 0)?;
    let mut fields = fields.iter();

    let version = expect_varint(fields.next(), flat::VERSION, bytes.len())?;
    if version != flat::ENVELOPE_VERSION {
        return Err(ClaimError::MalformedEnvelope {
            offset: 0,
            reason: "unsupported flat envelope version",
        });
    }

    let claim_type = expect_varint(fields.next(), flat::CLAIM_TYPE, bytes.len())?;
    let (variant, payload_field) = match claim_type {
        flat::STREAM_TYPE => (ClaimVariant::Stream, flat::STREAM),
        flat::CERTIFICATE_TYPE => (ClaimVariant::Channel, flat::CERTIFICATE),
        tag => return Err(ClaimError::UnknownVariant { tag }),
    };

    let payload = expect_bytes(fields.next(), payload_field, bytes.len())?;

    let signature_field = fields.next();
    if let Some(extra) = fields.next() {
        return Err(ClaimError::MalformedEnvelope {
            offset: extra.start,
            reason: "unexpected field after signature",
        });
    }

    let (version, signature, signature_span) = match signature_field {
        None if variant == ClaimVariant::Channel => (ClaimVersion::Legacy, None, None),
        None => (ClaimVersion::Unsigned, None, None),
        Some(field) => {
            if field.number != flat::SIGNATURE {
                return Err(ClaimError::MalformedEnvelope {
                    offset: field.start,
                    reason: "unexpected field after payload",
                });
            }
            if variant == ClaimVariant::Channel {
                return Err(ClaimError::MalformedEnvelope {
                    offset: field.start,
                    reason: "legacy certificates cannot carry a signature",
                });
            }
            let body = expect_bytes(Some(field), flat::SIGNATURE, bytes.len())?;
            (ClaimVersion::Signed, Some(body), Some(field.start..field.end))
        }
    };

    Ok(Envelope {
        generation: Generation::V1,
        version,
        variant,
        payload,
        signature,
        signature_span,
    })
}

fn expect_varint(field: Option<&Field<'_>>, number: u32, end: usize) -> Result<u64, ClaimError> {
    match field {
        Some(field) if field.number == number => {
            field.as_varint().ok_or(ClaimError::MalformedEnvelope {
                offset: field.start,
                reason: "envelope header field is not a varint",
            })
        }
        Some(field) => Err(ClaimError::MalformedEnvelope {
            offset: field.start,
            reason: "envelope fields out of order",
        }),
        None => Err(ClaimError::MalformedEnvelope {
            offset: end,
            reason: "missing envelope header field",
        }),
    }
}

fn expect_bytes<'a>(
    field: Option<&Field<'a>>,
    number: u32,
    end: usize,
) -> Result<&'a [u8], ClaimError> {
    match field {
        Some(field) if field.number == number => {
            field.as_bytes().ok_or(ClaimError::MalformedEnvelope {
                offset: field.start,
                reason: "envelope body field is not length-delimited",
            })
        }
        Some(field) => Err(ClaimError::MalformedEnvelope {
            offset: field.start,
            reason: "payload field does not match claim type",
        }),
        None => Err(ClaimError::MalformedEnvelope {
            offset: end,
            reason: "missing payload field",
        }),
    }
}

// ============================================================================
// Framing
// ============================================================================

/// Wrap an encoded payload in the envelope of `generation`.
///
/// The flat envelope only knows streams and certificates; callers guarantee
/// the variant fits the generation.
pub(crate) fn wrap(
    generation: Generation,
    variant: ClaimVariant,
    payload: &[u8],
    signature: Option<&SignatureBlock>,
) -> Vec<u8> {
    match generation {
        Generation::V1 => {
            let (claim_type, field) = match variant {
                ClaimVariant::Channel => (flat::CERTIFICATE_TYPE, flat::CERTIFICATE),
                _ => (flat::STREAM_TYPE, flat::STREAM),
            };
            let mut out = Vec::with_capacity(payload.len() + 128);
            write_varint_field(flat::VERSION, flat::ENVELOPE_VERSION, &mut out);
            write_varint_field(flat::CLAIM_TYPE, claim_type, &mut out);
            write_bytes_field(field, payload, &mut out);
            if let Some(block) = signature {
                write_bytes_field(flat::SIGNATURE, &block.encode_v1(), &mut out);
            }
            out
        }
        Generation::V2 => match signature {
            None => {
                let mut out = Vec::with_capacity(1 + payload.len());
                out.push(V2_UNSIGNED_MARKER);
                out.extend_from_slice(payload);
                out
            }
            Some(block) => {
                let mut out = Vec::with_capacity(V2_SIGNED_HEADER_LEN + payload.len());
                out.push(V2_SIGNED_MARKER);
                out.extend_from_slice(&block.channel_id.claim_hash());
                out.extend_from_slice(&block.signature);
                out.extend_from_slice(payload);
                out
            }
        },
    }
}
