//! First-generation claim schema (proto2).
//!
//! Every required field is always emitted and optional fields keep their
//! presence, which is what lets historical claims re-encode byte for byte.
//! The outer envelope (version, claim type, publisher signature) is framed by
//! the core crate; only the inner messages are modelled here.

use prost::Message;

/// Legacy stream: metadata plus a content source.
#[derive(Clone, PartialEq, Message)]
pub struct Stream {
    #[prost(int32, required, tag = "1")]
    pub version: i32,

    #[prost(message, required, tag = "2")]
    pub metadata: Metadata,

    #[prost(message, required, tag = "3")]
    pub source: Source,
}

#[derive(Clone, PartialEq, Message)]
pub struct Metadata {
    #[prost(int32, required, tag = "1")]
    pub version: i32,

    #[prost(int32, required, tag = "2")]
    pub language: i32,

    #[prost(string, required, tag = "3")]
    pub title: String,

    #[prost(string, required, tag = "4")]
    pub description: String,

    #[prost(string, required, tag = "5")]
    pub author: String,

    #[prost(string, required, tag = "6")]
    pub license: String,

    #[prost(bool, required, tag = "7")]
    pub nsfw: bool,

    #[prost(message, optional, tag = "8")]
    pub fee: Option<Fee>,

    #[prost(string, optional, tag = "9")]
    pub thumbnail: Option<String>,

    #[prost(string, optional, tag = "10")]
    pub preview: Option<String>,

    #[prost(string, optional, tag = "11")]
    pub license_url: Option<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Source {
    #[prost(int32, required, tag = "1")]
    pub version: i32,

    #[prost(int32, required, tag = "2")]
    pub source_type: i32,

    /// Stream descriptor hash.
    #[prost(bytes = "vec", required, tag = "3")]
    pub source: Vec<u8>,

    #[prost(string, required, tag = "4")]
    pub content_type: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct Fee {
    #[prost(int32, required, tag = "1")]
    pub version: i32,

    /// 1 = LBC, 2 = BTC, 3 = USD.
    #[prost(int32, required, tag = "2")]
    pub currency: i32,

    #[prost(bytes = "vec", required, tag = "3")]
    pub address: Vec<u8>,

    /// Whole units as a single-precision float.
    #[prost(float, required, tag = "4")]
    pub amount: f32,
}

/// Legacy channel claim: a bare public key.
#[derive(Clone, PartialEq, Message)]
pub struct Certificate {
    #[prost(int32, required, tag = "1")]
    pub version: i32,

    /// 1 = NIST256p, 2 = NIST384p, 3 = SECP256k1.
    #[prost(int32, required, tag = "2")]
    pub key_type: i32,

    #[prost(bytes = "vec", required, tag = "4")]
    pub public_key: Vec<u8>,
}

/// Publisher signature block of a legacy stream claim.
#[derive(Clone, PartialEq, Message)]
pub struct Signature {
    #[prost(int32, required, tag = "1")]
    pub version: i32,

    #[prost(int32, required, tag = "2")]
    pub signature_type: i32,

    #[prost(bytes = "vec", required, tag = "3")]
    pub signature: Vec<u8>,

    /// Signing channel's claim id, display byte order.
    #[prost(bytes = "vec", required, tag = "4")]
    pub certificate_id: Vec<u8>,
}
