//! Network constant tables and base58check addresses.
//!
//! The tables are immutable; a [`Network`] value is chosen once by the caller
//! and passed wherever an address has to be rendered or checked. Payload
//! decoding and compiling never consult them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::ClaimError;
use crate::types::{hash160, sha256d};

/// Length of a raw address: prefix, hash160, 4-byte checksum.
pub const ADDRESS_LEN: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Regtest,
}

/// Per-network derivation constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkParams {
    /// Name the chain daemon uses for this network.
    pub name: &'static str,
    pub pubkey_address_prefix: u8,
    pub script_address_prefix: u8,
}

const MAINNET: NetworkParams = NetworkParams {
    name: "lbrycrd_main",
    pubkey_address_prefix: 0x55,
    script_address_prefix: 0x7a,
};

const TESTNET: NetworkParams = NetworkParams {
    name: "lbrycrd_testnet",
    pubkey_address_prefix: 111,
    script_address_prefix: 196,
};

const REGTEST: NetworkParams = NetworkParams {
    name: "lbrycrd_regtest",
    pubkey_address_prefix: 111,
    script_address_prefix: 196,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    PubkeyHash,
    ScriptHash,
}

impl Network {
    pub const fn params(self) -> &'static NetworkParams {
        match self {
            Network::Mainnet => &MAINNET,
            Network::Testnet => &TESTNET,
            Network::Regtest => &REGTEST,
        }
    }

    pub const fn name(self) -> &'static str {
        self.params().name
    }

    fn prefix(self, kind: AddressKind) -> u8 {
        match kind {
            AddressKind::PubkeyHash => self.params().pubkey_address_prefix,
            AddressKind::ScriptHash => self.params().script_address_prefix,
        }
    }

    /// Raw 25-byte address for a 20-byte key or script hash.
    pub fn raw_address(self, hash: &[u8; 20], kind: AddressKind) -> [u8; ADDRESS_LEN] {
        let mut raw = [0u8; ADDRESS_LEN];
        raw[0] = self.prefix(kind);
        raw[1..21].copy_from_slice(hash);
        let checksum = sha256d(&raw[..21]);
        raw[21..].copy_from_slice(&checksum[..4]);
        raw
    }

    /// Raw pay-to-pubkey-hash address for a SEC1-encoded public key.
    pub fn raw_address_for_key(self, sec1_key: &[u8]) -> [u8; ADDRESS_LEN] {
        self.raw_address(&hash160(sec1_key), AddressKind::PubkeyHash)
    }

    /// Check a raw address against this network and render it in base58.
    pub fn encode_address(self, raw: &[u8]) -> Result<String, ClaimError> {
        self.check_raw(raw)?;
        Ok(bs58::encode(raw).into_string())
    }

    /// Parse a base58 address, checking its checksum and network prefix.
    pub fn decode_address(self, address: &str) -> Result<[u8; ADDRESS_LEN], ClaimError> {
        let bytes = bs58::decode(address)
            .into_vec()
            .map_err(|e| ClaimError::InvalidAddress {
                reason: e.to_string(),
            })?;
        self.check_raw(&bytes)?;
        let mut raw = [0u8; ADDRESS_LEN];
        raw.copy_from_slice(&bytes);
        Ok(raw)
    }

    fn check_raw(self, raw: &[u8]) -> Result<(), ClaimError> {
        if raw.len() != ADDRESS_LEN {
            return Err(ClaimError::InvalidAddress {
                reason: format!("expected {ADDRESS_LEN} bytes, got {}", raw.len()),
            });
        }
        let params = self.params();
        if raw[0] != params.pubkey_address_prefix && raw[0] != params.script_address_prefix {
            return Err(ClaimError::InvalidAddress {
                reason: format!("prefix {:#04x} does not belong to {}", raw[0], params.name),
            });
        }
        if sha256d(&raw[..21])[..4] != raw[21..] {
            return Err(ClaimError::InvalidAddress {
                reason: "checksum mismatch".to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
#[error("unknown network: {0}")]
pub struct UnknownNetwork(pub String);

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lbrycrd_main" | "mainnet" | "main" => Ok(Network::Mainnet),
            "lbrycrd_testnet" | "testnet" | "test" => Ok(Network::Testnet),
            "lbrycrd_regtest" | "regtest" => Ok(Network::Regtest),
            other => Err(UnknownNetwork(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_daemon_names() {
        assert_eq!("lbrycrd_main".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("lbrycrd_testnet".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!("regtest".parse::<Network>().unwrap(), Network::Regtest);
        assert!("bitcoin".parse::<Network>().is_err());
    }

    #[test]
    fn test_display_uses_daemon_name() {
        assert_eq!(Network::Testnet.to_string(), "lbrycrd_testnet");
    }

    #[test]
    fn test_address_roundtrip() {
        let raw = Network::Mainnet.raw_address(&[0x11; 20], AddressKind::PubkeyHash);
        let address = Network::Mainnet.encode_address(&raw).unwrap();
        // mainnet pubkey-hash addresses start with 'b'
        assert!(address.starts_with('b'));
        assert_eq!(Network::Mainnet.decode_address(&address).unwrap(), raw);
    }

    #[test]
    fn test_wrong_network_rejected() {
        let raw = Network::Testnet.raw_address(&[0x11; 20], AddressKind::PubkeyHash);
        let address = bs58::encode(raw).into_string();
        assert!(matches!(
            Network::Mainnet.decode_address(&address),
            Err(ClaimError::InvalidAddress { .. })
        ));
        assert!(Network::Regtest.decode_address(&address).is_ok());
    }

    #[test]
    fn test_checksum_mismatch_rejected() {
        let mut raw = Network::Mainnet.raw_address(&[0x22; 20], AddressKind::ScriptHash);
        raw[24] ^= 0x01;
        assert!(Network::Mainnet.encode_address(&raw).is_err());
    }

    #[test]
    fn test_short_address_rejected() {
        assert!(Network::Mainnet.encode_address(&[0x55; 21]).is_err());
    }
}
