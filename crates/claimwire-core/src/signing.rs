//! Publisher signatures.
//!
//! A channel signs the sha256 digest of a claim's signable bytes, bound to
//! the transaction that carries it:
//!
//! - first generation: `sha256(claim_address || unsigned_claim || channel_id)`
//! - second generation: `sha256(first_input || channel_claim_hash || payload)`
//!
//! The digest is signed directly (prehash) with secp256k1 ECDSA. Keys stay
//! with the caller; nothing here stores or derives them.

use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::{Signature, SigningKey, VerifyingKey};
use k256::PublicKey;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::compiler::signable_payload;
use crate::envelope::Generation;
use crate::error::ClaimError;
use crate::network::ADDRESS_LEN;
use crate::pubkey::KeyType;
use crate::record::ClaimRecord;
use crate::signature::SignatureBlock;
use crate::types::ClaimId;

/// Transaction data a signature is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding<'a> {
    /// Raw 25-byte address the first-generation claim output pays to.
    ClaimAddress(&'a [u8]),
    /// Serialized outpoint of the transaction's first input.
    FirstInput(&'a [u8]),
}

/// Digest a signature by `channel_id` over `record` must cover.
pub fn signature_digest(
    record: &ClaimRecord,
    channel_id: &ClaimId,
    binding: Binding<'_>,
) -> Result<[u8; 32], ClaimError> {
    let mut hasher = Sha256::new();
    match (record.generation(), binding) {
        (Generation::V1, Binding::ClaimAddress(address)) => {
            if address.len() != ADDRESS_LEN {
                return Err(ClaimError::InvalidAddress {
                    reason: format!("expected {ADDRESS_LEN} bytes, got {}", address.len()),
                });
            }
            hasher.update(address);
            hasher.update(signable_payload(record));
            hasher.update(channel_id.as_bytes());
        }
        (Generation::V2, Binding::FirstInput(input)) => {
            hasher.update(input);
            hasher.update(channel_id.claim_hash());
            hasher.update(signable_payload(record));
        }
        _ => {
            return Err(ClaimError::InvalidSignatureBlock {
                reason: "binding does not match the claim generation",
            })
        }
    }
    Ok(hasher.finalize().into())
}

/// Sign `record` as `channel_id` and attach the signature.
///
/// Any existing signature is replaced.
pub fn sign_claim(
    record: &mut ClaimRecord,
    key: &SigningKey,
    channel_id: ClaimId,
    binding: Binding<'_>,
) -> Result<(), ClaimError> {
    let digest = signature_digest(record, &channel_id, binding)?;
    let signature: Signature = key
        .sign_prehash(&digest)
        .map_err(|_| ClaimError::InvalidSignatureBlock {
            reason: "signing failed",
        })?;
    let signature = signature.normalize_s().unwrap_or(signature);

    let mut raw = [0u8; 64];
    raw.copy_from_slice(&signature.to_bytes());
    record.attach_signature(SignatureBlock::secp256k1(raw, channel_id))?;
    debug!(channel = %channel_id, "signed claim");
    Ok(())
}

/// Check `record`'s signature against the signing channel's key.
pub fn verify_claim(
    record: &ClaimRecord,
    channel_key: &PublicKey,
    binding: Binding<'_>,
) -> Result<(), ClaimError> {
    let block = record.signature().ok_or(ClaimError::InvalidSignatureBlock {
        reason: "claim is not signed",
    })?;
    if block.key_type != KeyType::Secp256k1 {
        return Err(ClaimError::InvalidSignatureBlock {
            reason: "only secp256k1 signatures can be verified",
        });
    }
    let signature =
        Signature::from_slice(&block.signature).map_err(|_| ClaimError::InvalidSignatureBlock {
            reason: "signature is not a valid r || s pair",
        })?;
    // older signers did not normalize s
    let signature = signature.normalize_s().unwrap_or(signature);

    let digest = signature_digest(record, &block.channel_id, binding)?;
    VerifyingKey::from(channel_key)
        .verify_prehash(&digest, &signature)
        .map_err(|_| ClaimError::SignatureMismatch)
}

/// Check `record`'s signature against a decoded channel claim.
pub fn verify_with_channel(
    record: &ClaimRecord,
    channel: &ClaimRecord,
    binding: Binding<'_>,
) -> Result<(), ClaimError> {
    let key = channel.channel()?.decoded_key()?;
    verify_claim(record, &key, binding)
}
