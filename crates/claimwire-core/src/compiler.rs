//! Round-trip compiler.
//!
//! `decode` runs the envelope, the payload schema, the key codec (for
//! channels) and the signature parser, and either returns a complete record
//! or the first error. `compile` is the inverse. Payloads are only accepted
//! when they are canonically encoded, so an untouched record always compiles
//! back to the exact bytes it was decoded from.

use claimwire_schema::{legacy, v2};
use prost::Message;
use tracing::debug;

use crate::envelope::{parse_envelope, wrap, ClaimVariant, Envelope, Generation};
use crate::error::{ClaimError, PayloadError};
use crate::pubkey::{decode_public_key, KeyType};
use crate::record::{ClaimRecord, Payload};
use crate::signature::SignatureBlock;

/// Decode claim bytes into a record.
pub fn decode(bytes: &[u8]) -> Result<ClaimRecord, ClaimError> {
    let envelope = parse_envelope(bytes)?;
    let payload = decode_payload(&envelope)?;
    let signature = envelope
        .signature
        .map(|raw| SignatureBlock::from_wire(envelope.generation, raw))
        .transpose()?;

    debug!(
        generation = ?envelope.generation,
        version = ?envelope.version,
        variant = %envelope.variant,
        len = bytes.len(),
        "decoded claim"
    );

    Ok(ClaimRecord::from_parts(
        envelope.generation,
        envelope.version,
        envelope.variant,
        payload,
        signature,
    ))
}

/// Decode a hex-encoded claim value.
pub fn decode_hex(value: &str) -> Result<ClaimRecord, ClaimError> {
    let bytes = hex::decode(value.trim())?;
    decode(&bytes)
}

fn decode_payload(envelope: &Envelope<'_>) -> Result<Payload, ClaimError> {
    match (envelope.generation, envelope.variant) {
        (Generation::V2, _) => {
            let claim: v2::Claim = decode_canonical("claim", envelope.payload)?;
            check_channel_key(&claim)?;
            Ok(Payload::Current(claim))
        }
        (Generation::V1, ClaimVariant::Stream) => {
            let stream: legacy::Stream = decode_canonical("stream", envelope.payload)?;
            Ok(Payload::LegacyStream(stream))
        }
        (Generation::V1, ClaimVariant::Channel) => {
            let certificate: legacy::Certificate =
                decode_canonical("certificate", envelope.payload)?;
            // NIST keys are carried as opaque bytes
            if KeyType::from_code(certificate.key_type) == Some(KeyType::Secp256k1) {
                decode_public_key(&certificate.public_key)?;
            }
            Ok(Payload::LegacyCertificate(certificate))
        }
        (Generation::V1, _) => Err(ClaimError::MalformedEnvelope {
            offset: 0,
            reason: "variant cannot appear in a flat envelope",
        }),
    }
}

/// A channel key, when present, must decode as a curve point.
fn check_channel_key(claim: &v2::Claim) -> Result<(), ClaimError> {
    if let Some(v2::claim::Kind::Channel(channel)) = &claim.kind {
        if !channel.public_key.is_empty() {
            decode_public_key(&channel.public_key)?;
        }
    }
    Ok(())
}

/// Payload bytes for `record`, rejecting anything `decode` would refuse.
fn encode_payload(record: &ClaimRecord) -> Result<Vec<u8>, ClaimError> {
    if let Some(claim) = record.as_claim() {
        check_channel_key(claim)?;
    }
    Ok(record.payload().encode())
}

/// Decode `bytes` as `M` and insist that re-encoding reproduces them.
fn decode_canonical<M: Message + Default>(
    field: &'static str,
    bytes: &[u8],
) -> Result<M, ClaimError> {
    let message = M::decode(bytes).map_err(|e| ClaimError::schema(field, e))?;
    if message.encoded_len() != bytes.len() || message.encode_to_vec() != bytes {
        return Err(ClaimError::schema(field, PayloadError::NonCanonical));
    }
    Ok(message)
}

/// Wire bytes for `record`, including its signature block if it has one.
///
/// Legacy records can only come from decoding, so compiling one reproduces
/// the historical bytes; no new legacy-form claim can be produced. Fails with
/// [`ClaimError::InvalidKeyEncoding`] when a channel key set through
/// [`ClaimRecord::channel_mut`] is not a valid point.
pub fn compile(record: &ClaimRecord) -> Result<Vec<u8>, ClaimError> {
    let payload = encode_payload(record)?;
    let bytes = wrap(
        record.generation(),
        record.variant(),
        &payload,
        record.signature(),
    );
    debug!(
        generation = ?record.generation(),
        version = ?record.version(),
        variant = %record.variant(),
        len = bytes.len(),
        "compiled claim"
    );
    Ok(bytes)
}

/// Wire bytes for `record` with any signature block left out.
pub fn compile_unsigned(record: &ClaimRecord) -> Result<Vec<u8>, ClaimError> {
    let payload = encode_payload(record)?;
    Ok(wrap(record.generation(), record.variant(), &payload, None))
}

/// The bytes a signature over `record` covers.
///
/// First-generation claims sign the unsigned envelope; second-generation
/// claims sign the bare payload.
pub fn signable_payload(record: &ClaimRecord) -> Vec<u8> {
    match record.generation() {
        Generation::V1 => wrap(
            Generation::V1,
            record.variant(),
            &record.payload().encode(),
            None,
        ),
        Generation::V2 => record.payload().encode(),
    }
}

impl ClaimRecord {
    /// See [`compile`].
    pub fn compile(&self) -> Result<Vec<u8>, ClaimError> {
        compile(self)
    }

    pub fn to_hex(&self) -> Result<String, ClaimError> {
        compile(self).map(hex::encode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::ClaimVersion;
    use crate::signature::strip_signature;
    use crate::types::ClaimId;

    const LEGACY_CERTIFICATE: &str = "08011002225e0801100322583056301006072a8648ce3d020106052b8104000a03420004d015365a40f3e5c03c87227168e5851f44659837bcf6a3398ae633bc37d04ee19baeb26dc888003bd728146dbea39f5344bf8c52cedaf1a3a1623a0166f4a367";

    #[test]
    fn test_decode_legacy_certificate() {
        let record = decode_hex(LEGACY_CERTIFICATE).unwrap();
        assert_eq!(record.version(), ClaimVersion::Legacy);
        assert_eq!(record.variant(), ClaimVariant::Channel);
        assert_eq!(record.title(), "");
        assert!(record.channel().unwrap().decoded_key().is_ok());
        assert_eq!(record.to_hex().unwrap(), LEGACY_CERTIFICATE);
    }

    #[test]
    fn test_legacy_certificate_with_bad_key() {
        let mut bytes = hex::decode(LEGACY_CERTIFICATE).unwrap();
        // flip a byte of the x coordinate
        bytes[40] ^= 0xff;
        assert!(matches!(
            decode(&bytes),
            Err(ClaimError::InvalidKeyEncoding { .. })
        ));
    }

    #[test]
    fn test_skeleton_compiles_to_marker_and_variant() {
        let record = ClaimRecord::new_stream_skeleton();
        assert_eq!(compile(&record).unwrap(), vec![0x00, 0x0a, 0x00]);
        assert_eq!(decode(&compile(&record).unwrap()).unwrap(), record);
    }

    #[test]
    fn test_non_canonical_payload_rejected() {
        // title before the variant field
        let bytes = vec![0x00, 0x42, 0x01, b't', 0x0a, 0x00];
        assert!(matches!(
            decode(&bytes),
            Err(ClaimError::SchemaPayload {
                field: "claim",
                source: PayloadError::NonCanonical,
            })
        ));
    }

    #[test]
    fn test_unknown_payload_field_rejected() {
        // field 15 is not part of the claim message
        let bytes = vec![0x00, 0x0a, 0x00, 0x78, 0x01];
        assert!(matches!(
            decode(&bytes),
            Err(ClaimError::SchemaPayload { .. })
        ));
    }

    #[test]
    fn test_garbage_payload_is_schema_error() {
        // stream body that is not a valid message
        let bytes = vec![0x00, 0x0a, 0x02, 0xff, 0xff];
        assert!(matches!(
            decode(&bytes),
            Err(ClaimError::SchemaPayload { field: "claim", .. })
        ));
    }

    #[test]
    fn test_channel_with_bad_key_rejected() {
        let bytes = vec![0x00, 0x12, 0x05, 0x0a, 0x03, 0x01, 0x02, 0x03];
        assert!(matches!(
            decode(&bytes),
            Err(ClaimError::InvalidKeyEncoding { .. })
        ));
    }

    #[test]
    fn test_compile_refuses_bad_channel_key() {
        let mut record = ClaimRecord::new_channel_skeleton();
        record.channel_mut().unwrap().public_key = vec![1, 2, 3];
        assert!(matches!(
            compile(&record),
            Err(ClaimError::InvalidKeyEncoding { .. })
        ));
        assert!(matches!(
            compile_unsigned(&record),
            Err(ClaimError::InvalidKeyEncoding { .. })
        ));

        // the same bytes through a whole replacement payload
        let mut record = ClaimRecord::new_stream_skeleton();
        record
            .replace_payload(v2::Claim {
                kind: Some(v2::claim::Kind::Channel(v2::Channel {
                    public_key: vec![0x30; 88],
                    ..Default::default()
                })),
                ..Default::default()
            })
            .unwrap();
        assert!(compile(&record).is_err());

        // clearing the key makes it compile again
        record.channel_mut().unwrap().public_key.clear();
        let bytes = compile(&record).unwrap();
        assert_eq!(decode(&bytes).unwrap(), record);
    }

    #[test]
    fn test_signed_record_compiles_and_strips() {
        let mut record = ClaimRecord::new_stream_skeleton();
        record.set_title("hello").unwrap();
        let unsigned = compile(&record).unwrap();

        record
            .attach_signature(SignatureBlock::secp256k1([3; 64], ClaimId::from_bytes([4; 20])))
            .unwrap();
        let signed = compile(&record).unwrap();
        assert_eq!(signed.len(), unsigned.len() + 84);
        assert_eq!(compile_unsigned(&record).unwrap(), unsigned);
        assert_eq!(strip_signature(&signed).unwrap(), unsigned);
        assert_eq!(signable_payload(&record), &unsigned[1..]);

        let decoded = decode(&signed).unwrap();
        assert_eq!(decoded, record);
        assert_eq!(decoded.version(), ClaimVersion::Signed);
    }

    #[test]
    fn test_hex_errors_are_reported() {
        assert!(matches!(decode_hex("zz"), Err(ClaimError::InvalidHex(_))));
    }
}
