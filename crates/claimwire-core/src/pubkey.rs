//! Public-key codec.
//!
//! Channel claims store their key as a DER `SubjectPublicKeyInfo` wrapping an
//! uncompressed secp256k1 point: a fixed 23-byte header followed by the
//! 65-byte SEC1 point, 88 bytes in total. No other layout is accepted.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::PublicKey;
use serde::{Deserialize, Serialize};

use crate::error::ClaimError;

/// SEQUENCE { SEQUENCE { id-ecPublicKey, secp256k1 }, BIT STRING (66 bytes) }
pub const SPKI_PREFIX: [u8; 23] = [
    0x30, 0x56, 0x30, 0x10, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, 0x06, 0x05,
    0x2b, 0x81, 0x04, 0x00, 0x0a, 0x03, 0x42, 0x00,
];

pub const UNCOMPRESSED_POINT_LEN: usize = 65;

pub const PUBLIC_KEY_DER_LEN: usize = SPKI_PREFIX.len() + UNCOMPRESSED_POINT_LEN;

/// Key algorithms a signature block or certificate can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyType {
    Nist256p,
    Nist384p,
    Secp256k1,
}

impl KeyType {
    pub const fn code(self) -> i32 {
        match self {
            KeyType::Nist256p => 1,
            KeyType::Nist384p => 2,
            KeyType::Secp256k1 => 3,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(KeyType::Nist256p),
            2 => Some(KeyType::Nist384p),
            3 => Some(KeyType::Secp256k1),
            _ => None,
        }
    }
}

/// Encode a public key in the channel-claim wire form.
pub fn encode_public_key(key: &PublicKey) -> Vec<u8> {
    let point = key.to_encoded_point(false);
    let mut der = Vec::with_capacity(PUBLIC_KEY_DER_LEN);
    der.extend_from_slice(&SPKI_PREFIX);
    der.extend_from_slice(point.as_bytes());
    der
}

/// Decode the channel-claim wire form back into a curve point.
pub fn decode_public_key(der: &[u8]) -> Result<PublicKey, ClaimError> {
    if der.len() != PUBLIC_KEY_DER_LEN {
        return Err(ClaimError::InvalidKeyEncoding {
            reason: format!("expected {PUBLIC_KEY_DER_LEN} bytes, got {}", der.len()),
        });
    }
    let (prefix, point) = der.split_at(SPKI_PREFIX.len());
    if prefix != SPKI_PREFIX {
        return Err(ClaimError::InvalidKeyEncoding {
            reason: "not a secp256k1 SubjectPublicKeyInfo".to_string(),
        });
    }
    PublicKey::from_sec1_bytes(point).map_err(|_| ClaimError::InvalidKeyEncoding {
        reason: "point is not on the curve".to_string(),
    })
}

/// Compressed SEC1 form of a wire-encoded key, for display.
pub fn compressed_sec1(der: &[u8]) -> Result<Vec<u8>, ClaimError> {
    let key = decode_public_key(der)?;
    Ok(key.to_encoded_point(true).as_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::SecretKey;
    use proptest::prelude::*;

    // key of a published legacy certificate
    const CHAIN_KEY: &str = "3056301006072a8648ce3d020106052b8104000a03420004d015365a40f3e5c03c87227168e5851f44659837bcf6a3398ae633bc37d04ee19baeb26dc888003bd728146dbea39f5344bf8c52cedaf1a3a1623a0166f4a367";

    #[test]
    fn test_decode_chain_key() {
        let der = hex::decode(CHAIN_KEY).unwrap();
        let key = decode_public_key(&der).unwrap();
        assert_eq!(encode_public_key(&key), der);
    }

    #[test]
    fn test_compressed_form() {
        let der = hex::decode(CHAIN_KEY).unwrap();
        let compressed = compressed_sec1(&der).unwrap();
        assert_eq!(compressed.len(), 33);
        // y ends in 0x67, odd
        assert_eq!(compressed[0], 0x03);
        assert_eq!(&compressed[1..], &der[24..56]);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let der = hex::decode(CHAIN_KEY).unwrap();
        let err = decode_public_key(&der[..87]).unwrap_err();
        assert!(matches!(err, ClaimError::InvalidKeyEncoding { .. }));
    }

    #[test]
    fn test_wrong_prefix_rejected() {
        let mut der = hex::decode(CHAIN_KEY).unwrap();
        // last byte of the curve oid
        der[19] = 0x07;
        assert!(decode_public_key(&der).is_err());
    }

    #[test]
    fn test_point_off_curve_rejected() {
        let mut der = SPKI_PREFIX.to_vec();
        der.push(0x04);
        der.extend_from_slice(&[0u8; 64]);
        assert!(decode_public_key(&der).is_err());
    }

    #[test]
    fn test_key_type_codes() {
        for key_type in [KeyType::Nist256p, KeyType::Nist384p, KeyType::Secp256k1] {
            assert_eq!(KeyType::from_code(key_type.code()), Some(key_type));
        }
        assert_eq!(KeyType::from_code(0), None);
    }

    proptest! {
        #[test]
        fn prop_key_encode_decode_inverse(seed in any::<[u8; 32]>()) {
            // most 32-byte strings are valid scalars; skip the rest
            if let Ok(secret) = SecretKey::from_slice(&seed) {
                let key = secret.public_key();
                let der = encode_public_key(&key);
                prop_assert_eq!(der.len(), PUBLIC_KEY_DER_LEN);
                prop_assert_eq!(decode_public_key(&der).unwrap(), key);
            }
        }
    }
}
