//! The codec: configured entry points over the core claim operations.

use claimwire_core::{
    attach_signature, compile, decode, strip_signature, verify_claim, Binding, ClaimError,
    ClaimId, ClaimRecord, Network, SignatureBlock,
};
use k256::PublicKey;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest claim value the chain accepts.
pub const DEFAULT_MAX_CLAIM_SIZE: usize = 8192;

/// Configuration for the codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Network whose constants are used for addresses.
    pub network: Network,
    /// Upper bound on claim values, in bytes, for both input and output.
    pub max_claim_size: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            network: Network::Mainnet,
            max_claim_size: DEFAULT_MAX_CLAIM_SIZE,
        }
    }
}

/// Claim codec bound to one network and size limit.
///
/// Holds no mutable state; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct ClaimCodec {
    config: CodecConfig,
}

impl ClaimCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn network(&self) -> Network {
        self.config.network
    }

    fn check_size(&self, len: usize) -> Result<()> {
        if len > self.config.max_claim_size {
            tracing::warn!(
                len,
                max = self.config.max_claim_size,
                "rejecting oversized claim"
            );
            return Err(Error::TooLarge {
                len,
                max: self.config.max_claim_size,
            });
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Decode / Compile
    // ─────────────────────────────────────────────────────────────────────────

    /// Decode a claim value.
    pub fn decode(&self, bytes: &[u8]) -> Result<ClaimRecord> {
        self.check_size(bytes.len())?;
        Ok(decode(bytes)?)
    }

    /// Decode a hex-encoded claim value.
    pub fn decode_hex(&self, value: &str) -> Result<ClaimRecord> {
        let value = value.trim();
        self.check_size(value.len() / 2)?;
        let bytes = hex::decode(value).map_err(ClaimError::from)?;
        self.decode(&bytes)
    }

    /// Compile a record to chain-ready bytes.
    pub fn compile(&self, record: &ClaimRecord) -> Result<Vec<u8>> {
        let bytes = compile(record)?;
        self.check_size(bytes.len())?;
        Ok(bytes)
    }

    pub fn compile_hex(&self, record: &ClaimRecord) -> Result<String> {
        self.compile(record).map(hex::encode)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Signatures
    // ─────────────────────────────────────────────────────────────────────────

    /// Remove the signature block from a claim value.
    pub fn strip(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        self.check_size(bytes.len())?;
        Ok(strip_signature(bytes)?)
    }

    /// Frame a signature block into an unsigned claim value.
    pub fn attach(&self, unsigned: &[u8], block: &SignatureBlock) -> Result<Vec<u8>> {
        self.check_size(unsigned.len())?;
        let signed = attach_signature(unsigned, block)?;
        self.check_size(signed.len())?;
        Ok(signed)
    }

    /// Verify a record's signature against its channel's key.
    pub fn verify(
        &self,
        record: &ClaimRecord,
        channel_key: &PublicKey,
        binding: Binding<'_>,
    ) -> Result<()> {
        Ok(verify_claim(record, channel_key, binding)?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Identifiers & Addresses
    // ─────────────────────────────────────────────────────────────────────────

    /// Claim id of the claim created by output `nout` of `txid`.
    pub fn claim_id(&self, txid: &str, nout: u32) -> Result<ClaimId> {
        ClaimId::from_outpoint(txid, nout).map_err(|e| Error::Claim(e.into()))
    }

    /// Base58 address of a stream's fee, if it has one.
    pub fn fee_address(&self, record: &ClaimRecord) -> Result<Option<String>> {
        let stream = record.stream()?;
        match stream.fee() {
            Some(fee) if !fee.raw_address().is_empty() => {
                Ok(Some(fee.address(self.config.network)?))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.max_claim_size, 8192);
    }

    #[test]
    fn test_config_from_json() {
        let config: CodecConfig = serde_json::from_str(r#"{"network": "testnet"}"#).unwrap();
        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.max_claim_size, DEFAULT_MAX_CLAIM_SIZE);
    }

    #[test]
    fn test_oversized_input_rejected() {
        let codec = ClaimCodec::new(CodecConfig {
            max_claim_size: 4,
            ..Default::default()
        });
        let err = codec.decode(&[0u8; 5]).unwrap_err();
        assert!(matches!(err, Error::TooLarge { len: 5, max: 4 }));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_oversized_output_rejected() {
        let codec = ClaimCodec::new(CodecConfig {
            max_claim_size: 16,
            ..Default::default()
        });
        let mut record = ClaimRecord::new_stream_skeleton();
        record.set_description("x".repeat(32)).unwrap();
        assert!(matches!(
            codec.compile(&record),
            Err(Error::TooLarge { .. })
        ));
    }

    #[test]
    fn test_truncation_is_retryable() {
        let codec = ClaimCodec::default();
        let err = codec.decode(&[0x00, 0x0a, 0x05]).unwrap_err();
        assert!(err.is_retryable());
    }

    #[test]
    fn test_fee_address_requires_stream() {
        let codec = ClaimCodec::default();
        let record = ClaimRecord::new_channel_skeleton();
        assert!(matches!(
            codec.fee_address(&record),
            Err(Error::Claim(ClaimError::VariantMismatch { .. }))
        ));
        let record = ClaimRecord::new_stream_skeleton();
        assert_eq!(codec.fee_address(&record).unwrap(), None);
    }
}
