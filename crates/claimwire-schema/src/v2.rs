//! Current claim schema.
//!
//! Proto3 semantics: scalar fields at their zero value are not emitted, so a
//! record built field by field encodes to the same bytes every time.

use prost::{Enumeration, Message};

/// Top-level claim message.
#[derive(Clone, PartialEq, Message)]
pub struct Claim {
    /// Exactly one content variant.
    #[prost(oneof = "claim::Kind", tags = "1, 2, 3, 4")]
    pub kind: Option<claim::Kind>,

    #[prost(string, tag = "8")]
    pub title: String,

    #[prost(string, tag = "9")]
    pub description: String,

    #[prost(message, optional, tag = "10")]
    pub thumbnail: Option<Source>,

    #[prost(string, repeated, tag = "11")]
    pub tags: Vec<String>,

    #[prost(message, repeated, tag = "12")]
    pub languages: Vec<Language>,

    #[prost(message, repeated, tag = "13")]
    pub locations: Vec<Location>,
}

pub mod claim {
    use super::{Channel, ClaimList, ClaimReference, Stream};
    use prost::Oneof;

    /// Content variant of a claim. Field numbers 1..=4.
    #[derive(Clone, PartialEq, Oneof)]
    pub enum Kind {
        #[prost(message, tag = "1")]
        Stream(Stream),
        #[prost(message, tag = "2")]
        Channel(Channel),
        #[prost(message, tag = "3")]
        Collection(ClaimList),
        #[prost(message, tag = "4")]
        Repost(ClaimReference),
    }
}

/// A piece of published content.
#[derive(Clone, PartialEq, Message)]
pub struct Stream {
    #[prost(message, optional, tag = "1")]
    pub source: Option<Source>,

    #[prost(string, tag = "2")]
    pub author: String,

    #[prost(string, tag = "3")]
    pub license: String,

    #[prost(string, tag = "4")]
    pub license_url: String,

    /// Unix seconds.
    #[prost(int64, tag = "5")]
    pub release_time: i64,

    #[prost(message, optional, tag = "6")]
    pub fee: Option<Fee>,

    #[prost(oneof = "stream::Media", tags = "10, 11, 12, 13")]
    pub media: Option<stream::Media>,
}

pub mod stream {
    use super::{Audio, Image, Software, Video};
    use prost::Oneof;

    #[derive(Clone, PartialEq, Oneof)]
    pub enum Media {
        #[prost(message, tag = "10")]
        Image(Image),
        #[prost(message, tag = "11")]
        Video(Video),
        #[prost(message, tag = "12")]
        Audio(Audio),
        #[prost(message, tag = "13")]
        Software(Software),
    }
}

/// A publishing identity.
#[derive(Clone, PartialEq, Message)]
pub struct Channel {
    /// DER-encoded public key used to verify claims signed by this channel.
    #[prost(bytes = "vec", tag = "1")]
    pub public_key: Vec<u8>,

    #[prost(string, tag = "2")]
    pub email: String,

    #[prost(string, tag = "3")]
    pub website_url: String,

    #[prost(message, optional, tag = "4")]
    pub cover: Option<Source>,

    #[prost(message, optional, tag = "5")]
    pub featured: Option<ClaimList>,
}

/// Pointer to another claim by its claim hash.
#[derive(Clone, PartialEq, Message)]
pub struct ClaimReference {
    #[prost(bytes = "vec", tag = "1")]
    pub claim_hash: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct ClaimList {
    #[prost(enumeration = "ListType", tag = "1")]
    pub list_type: i32,

    #[prost(message, repeated, tag = "2")]
    pub claim_references: Vec<ClaimReference>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
#[repr(i32)]
pub enum ListType {
    Collection = 0,
    Derivation = 2,
}

/// Where content bytes (or an image) can be found.
#[derive(Clone, PartialEq, Message)]
pub struct Source {
    #[prost(bytes = "vec", tag = "1")]
    pub hash: Vec<u8>,

    #[prost(string, tag = "2")]
    pub name: String,

    #[prost(uint64, tag = "3")]
    pub size: u64,

    #[prost(string, tag = "4")]
    pub media_type: String,

    #[prost(string, tag = "5")]
    pub url: String,

    #[prost(bytes = "vec", tag = "6")]
    pub sd_hash: Vec<u8>,

    #[prost(bytes = "vec", tag = "7")]
    pub bt_infohash: Vec<u8>,
}

impl Source {
    /// A source that only carries a URL (thumbnails, covers).
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, PartialEq, Message)]
pub struct Fee {
    #[prost(enumeration = "Currency", tag = "1")]
    pub currency: i32,

    /// Full 25-byte base58check address payload.
    #[prost(bytes = "vec", tag = "2")]
    pub address: Vec<u8>,

    /// Smallest unit of `currency` (deweys, satoshis or cents).
    #[prost(uint64, tag = "3")]
    pub amount: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
#[repr(i32)]
pub enum Currency {
    UnknownCurrency = 0,
    Lbc = 1,
    Btc = 2,
    Usd = 3,
}

/// Language tag. Codes follow the schema's ISO 639-1 table (`en` is 1).
#[derive(Clone, PartialEq, Message)]
pub struct Language {
    #[prost(int32, tag = "1")]
    pub language: i32,

    #[prost(int32, tag = "2")]
    pub script: i32,

    #[prost(int32, tag = "3")]
    pub region: i32,
}

impl Language {
    pub const EN: i32 = 1;
    pub const ES: i32 = 40;

    pub fn new(language: i32) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }
}

#[derive(Clone, PartialEq, Message)]
pub struct Location {
    #[prost(int32, tag = "1")]
    pub country: i32,

    #[prost(string, tag = "2")]
    pub state: String,

    #[prost(string, tag = "3")]
    pub city: String,

    #[prost(string, tag = "4")]
    pub code: String,

    #[prost(sint32, tag = "5")]
    pub latitude: i32,

    #[prost(sint32, tag = "6")]
    pub longitude: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct Image {
    #[prost(uint32, tag = "1")]
    pub width: u32,

    #[prost(uint32, tag = "2")]
    pub height: u32,
}

#[derive(Clone, PartialEq, Message)]
pub struct Video {
    #[prost(uint32, tag = "1")]
    pub width: u32,

    #[prost(uint32, tag = "2")]
    pub height: u32,

    #[prost(uint32, tag = "3")]
    pub duration: u32,

    #[prost(message, optional, tag = "15")]
    pub audio: Option<Audio>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Audio {
    #[prost(uint32, tag = "1")]
    pub duration: u32,
}

#[derive(Clone, PartialEq, Message)]
pub struct Software {
    #[prost(string, tag = "1")]
    pub os: String,
}
