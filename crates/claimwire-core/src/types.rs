//! Claim identifiers.

use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// A 20-byte claim identifier in display byte order.
///
/// Claim ids are shown (and stored in first-generation signatures) as the
/// byte-reversal of the on-chain claim hash. Second-generation signatures
/// carry the claim hash itself; use [`ClaimId::claim_hash`] for that form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClaimId(pub [u8; 20]);

impl ClaimId {
    pub const LEN: usize = 20;

    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Build from the on-chain (reversed) claim hash.
    pub fn from_claim_hash(hash: [u8; 20]) -> Self {
        let mut bytes = hash;
        bytes.reverse();
        Self(bytes)
    }

    /// The on-chain claim hash: display bytes reversed.
    pub fn claim_hash(&self) -> [u8; 20] {
        let mut hash = self.0;
        hash.reverse();
        hash
    }

    /// Derive the id of the claim created by output `nout` of transaction `txid`.
    ///
    /// `txid` is the usual display-order hex. The id is
    /// `reverse(hash160(reverse(txid) || be32(nout)))`.
    pub fn from_outpoint(txid: &str, nout: u32) -> Result<Self, hex::FromHexError> {
        let mut txid_bytes = hex::decode(txid)?;
        if txid_bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        txid_bytes.reverse();
        txid_bytes.extend_from_slice(&nout.to_be_bytes());
        Ok(Self::from_claim_hash(hash160(&txid_bytes)))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        Self::try_from(bytes.as_slice()).map_err(|_| hex::FromHexError::InvalidStringLength)
    }
}

impl fmt::Debug for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClaimId({})", self.to_hex())
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for ClaimId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 20]> for ClaimId {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for ClaimId {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 20] = slice.try_into()?;
        Ok(Self(arr))
    }
}

/// `ripemd160(sha256(data))`.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    Ripemd160::digest(sha).into()
}

/// `sha256(sha256(data))`.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}
