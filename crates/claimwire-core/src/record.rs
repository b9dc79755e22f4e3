//! Claim record and builder.
//!
//! A [`ClaimRecord`] is the single in-memory form of a claim across both wire
//! generations and all variants. Exactly one variant payload is populated;
//! variant-specific accessors report [`ClaimError::VariantMismatch`] instead
//! of handing back empty data. First-generation records are read-only: call
//! [`ClaimRecord::upgrade`] to get an editable copy.

use claimwire_schema::{legacy, v2};
use k256::PublicKey;
use prost::Message;
use std::borrow::Cow;

use crate::envelope::{ClaimVariant, ClaimVersion, Generation};
use crate::error::ClaimError;
use crate::network::Network;
use crate::pubkey::{decode_public_key, encode_public_key, KeyType};
use crate::signature::SignatureBlock;

/// Tag that marks content as unsuitable for all audiences.
pub const MATURE_TAG: &str = "mature";

/// Legacy source type naming an sd-hash source.
const LEGACY_SD_HASH_SOURCE: i32 = 1;

/// Schema payload of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Second-generation claim; `kind` is always populated.
    Current(v2::Claim),
    LegacyStream(legacy::Stream),
    LegacyCertificate(legacy::Certificate),
}

impl Payload {
    pub(crate) fn encode(&self) -> Vec<u8> {
        match self {
            Payload::Current(claim) => claim.encode_to_vec(),
            Payload::LegacyStream(stream) => stream.encode_to_vec(),
            Payload::LegacyCertificate(certificate) => certificate.encode_to_vec(),
        }
    }
}

/// A decoded or in-progress claim.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimRecord {
    generation: Generation,
    version: ClaimVersion,
    variant: ClaimVariant,
    payload: Payload,
    signature: Option<SignatureBlock>,
}

impl ClaimRecord {
    /// Assemble a record from decoded parts. The caller has already checked
    /// that version, variant and signature agree.
    pub(crate) fn from_parts(
        generation: Generation,
        version: ClaimVersion,
        variant: ClaimVariant,
        payload: Payload,
        signature: Option<SignatureBlock>,
    ) -> Self {
        Self {
            generation,
            version,
            variant,
            payload,
            signature,
        }
    }

    fn skeleton(kind: v2::claim::Kind) -> Self {
        let variant = variant_of(&kind);
        Self {
            generation: Generation::V2,
            version: ClaimVersion::Unsigned,
            variant,
            payload: Payload::Current(v2::Claim {
                kind: Some(kind),
                ..Default::default()
            }),
            signature: None,
        }
    }

    /// Empty unsigned stream claim.
    pub fn new_stream_skeleton() -> Self {
        Self::skeleton(v2::claim::Kind::Stream(v2::Stream::default()))
    }

    /// Empty unsigned channel claim.
    pub fn new_channel_skeleton() -> Self {
        Self::skeleton(v2::claim::Kind::Channel(v2::Channel::default()))
    }

    pub fn new_collection_skeleton() -> Self {
        Self::skeleton(v2::claim::Kind::Collection(v2::ClaimList::default()))
    }

    pub fn new_repost_skeleton() -> Self {
        Self::skeleton(v2::claim::Kind::Repost(v2::ClaimReference::default()))
    }

    /// Record around a complete second-generation claim message.
    pub fn from_claim(claim: v2::Claim) -> Result<Self, ClaimError> {
        let variant = claim
            .kind
            .as_ref()
            .map(variant_of)
            .ok_or(ClaimError::UnknownVariant { tag: 0 })?;
        Ok(Self {
            generation: Generation::V2,
            version: ClaimVersion::Unsigned,
            variant,
            payload: Payload::Current(claim),
            signature: None,
        })
    }

    // ------------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------------

    pub fn version(&self) -> ClaimVersion {
        self.version
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn variant(&self) -> ClaimVariant {
        self.variant
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn signature(&self) -> Option<&SignatureBlock> {
        self.signature.as_ref()
    }

    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    /// Second-generation claim message, if this is one.
    pub fn as_claim(&self) -> Option<&v2::Claim> {
        match &self.payload {
            Payload::Current(claim) => Some(claim),
            _ => None,
        }
    }

    fn mismatch(&self, expected: ClaimVariant) -> ClaimError {
        ClaimError::VariantMismatch {
            expected,
            actual: self.variant,
        }
    }

    // ------------------------------------------------------------------------
    // Common accessors
    // ------------------------------------------------------------------------

    pub fn title(&self) -> &str {
        match &self.payload {
            Payload::Current(claim) => &claim.title,
            Payload::LegacyStream(stream) => &stream.metadata.title,
            Payload::LegacyCertificate(_) => "",
        }
    }

    pub fn description(&self) -> &str {
        match &self.payload {
            Payload::Current(claim) => &claim.description,
            Payload::LegacyStream(stream) => &stream.metadata.description,
            Payload::LegacyCertificate(_) => "",
        }
    }

    pub fn tags(&self) -> &[String] {
        match &self.payload {
            Payload::Current(claim) => &claim.tags,
            _ => &[],
        }
    }

    /// Legacy streams carry a single language code, mapped onto the current table.
    pub fn languages(&self) -> Cow<'_, [v2::Language]> {
        match &self.payload {
            Payload::Current(claim) => Cow::Borrowed(&claim.languages),
            Payload::LegacyStream(stream) if stream.metadata.language != 0 => {
                Cow::Owned(vec![v2::Language::new(stream.metadata.language)])
            }
            _ => Cow::Owned(Vec::new()),
        }
    }

    pub fn locations(&self) -> &[v2::Location] {
        match &self.payload {
            Payload::Current(claim) => &claim.locations,
            _ => &[],
        }
    }

    /// Thumbnail URL.
    pub fn thumbnail(&self) -> Option<&str> {
        match &self.payload {
            Payload::Current(claim) => claim.thumbnail.as_ref().map(|source| source.url.as_str()),
            Payload::LegacyStream(stream) => stream.metadata.thumbnail.as_deref(),
            Payload::LegacyCertificate(_) => None,
        }
    }

    pub fn is_mature(&self) -> bool {
        match &self.payload {
            Payload::Current(claim) => claim.tags.iter().any(|tag| tag == MATURE_TAG),
            Payload::LegacyStream(stream) => stream.metadata.nsfw,
            Payload::LegacyCertificate(_) => false,
        }
    }

    // ------------------------------------------------------------------------
    // Variant accessors
    // ------------------------------------------------------------------------

    pub fn stream(&self) -> Result<StreamRef<'_>, ClaimError> {
        match &self.payload {
            Payload::Current(v2::Claim {
                kind: Some(v2::claim::Kind::Stream(stream)),
                ..
            }) => Ok(StreamRef::Current(stream)),
            Payload::LegacyStream(stream) => Ok(StreamRef::Legacy(stream)),
            _ => Err(self.mismatch(ClaimVariant::Stream)),
        }
    }

    pub fn channel(&self) -> Result<ChannelRef<'_>, ClaimError> {
        match &self.payload {
            Payload::Current(v2::Claim {
                kind: Some(v2::claim::Kind::Channel(channel)),
                ..
            }) => Ok(ChannelRef::Current(channel)),
            Payload::LegacyCertificate(certificate) => Ok(ChannelRef::Legacy(certificate)),
            _ => Err(self.mismatch(ClaimVariant::Channel)),
        }
    }

    pub fn collection(&self) -> Result<&v2::ClaimList, ClaimError> {
        match &self.payload {
            Payload::Current(v2::Claim {
                kind: Some(v2::claim::Kind::Collection(list)),
                ..
            }) => Ok(list),
            _ => Err(self.mismatch(ClaimVariant::Collection)),
        }
    }

    pub fn repost(&self) -> Result<&v2::ClaimReference, ClaimError> {
        match &self.payload {
            Payload::Current(v2::Claim {
                kind: Some(v2::claim::Kind::Repost(reference)),
                ..
            }) => Ok(reference),
            _ => Err(self.mismatch(ClaimVariant::Repost)),
        }
    }

    // ------------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------------

    /// Editable claim message. Mutating a signed record leaves the signature
    /// in place; it no longer covers the payload until re-signed.
    fn claim_mut(&mut self, field: &'static str) -> Result<&mut v2::Claim, ClaimError> {
        match &mut self.payload {
            Payload::Current(claim) => Ok(claim),
            _ => Err(ClaimError::LegacyReadOnly { field }),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ClaimError> {
        self.claim_mut("title")?.title = title.into();
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), ClaimError> {
        self.claim_mut("description")?.description = description.into();
        Ok(())
    }

    pub fn set_tags<I, S>(&mut self, tags: I) -> Result<(), ClaimError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.claim_mut("tags")?.tags = tags.into_iter().map(Into::into).collect();
        Ok(())
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) -> Result<(), ClaimError> {
        self.claim_mut("tags")?.tags.push(tag.into());
        Ok(())
    }

    pub fn set_languages(&mut self, languages: Vec<v2::Language>) -> Result<(), ClaimError> {
        self.claim_mut("languages")?.languages = languages;
        Ok(())
    }

    pub fn set_locations(&mut self, locations: Vec<v2::Location>) -> Result<(), ClaimError> {
        self.claim_mut("locations")?.locations = locations;
        Ok(())
    }

    /// Set or clear the thumbnail URL.
    pub fn set_thumbnail(&mut self, url: Option<String>) -> Result<(), ClaimError> {
        self.claim_mut("thumbnail")?.thumbnail = url.map(v2::Source::from_url);
        Ok(())
    }

    /// Replace the whole claim message, possibly switching variant.
    pub fn replace_payload(&mut self, claim: v2::Claim) -> Result<(), ClaimError> {
        let variant = claim
            .kind
            .as_ref()
            .map(variant_of)
            .ok_or(ClaimError::UnknownVariant { tag: 0 })?;
        *self.claim_mut("payload")? = claim;
        self.variant = variant;
        Ok(())
    }

    pub fn stream_mut(&mut self) -> Result<&mut v2::Stream, ClaimError> {
        let actual = self.variant;
        match self.claim_mut("stream")?.kind.as_mut() {
            Some(v2::claim::Kind::Stream(stream)) => Ok(stream),
            _ => Err(ClaimError::VariantMismatch {
                expected: ClaimVariant::Stream,
                actual,
            }),
        }
    }

    pub fn channel_mut(&mut self) -> Result<&mut v2::Channel, ClaimError> {
        let actual = self.variant;
        match self.claim_mut("channel")?.kind.as_mut() {
            Some(v2::claim::Kind::Channel(channel)) => Ok(channel),
            _ => Err(ClaimError::VariantMismatch {
                expected: ClaimVariant::Channel,
                actual,
            }),
        }
    }

    pub fn collection_mut(&mut self) -> Result<&mut v2::ClaimList, ClaimError> {
        let actual = self.variant;
        match self.claim_mut("collection")?.kind.as_mut() {
            Some(v2::claim::Kind::Collection(list)) => Ok(list),
            _ => Err(ClaimError::VariantMismatch {
                expected: ClaimVariant::Collection,
                actual,
            }),
        }
    }

    pub fn repost_mut(&mut self) -> Result<&mut v2::ClaimReference, ClaimError> {
        let actual = self.variant;
        match self.claim_mut("repost")?.kind.as_mut() {
            Some(v2::claim::Kind::Repost(reference)) => Ok(reference),
            _ => Err(ClaimError::VariantMismatch {
                expected: ClaimVariant::Repost,
                actual,
            }),
        }
    }

    /// Store `key` in the channel's public-key field.
    pub fn set_public_key(&mut self, key: &PublicKey) -> Result<(), ClaimError> {
        self.channel_mut()?.public_key = encode_public_key(key);
        Ok(())
    }

    pub fn set_website_url(&mut self, url: impl Into<String>) -> Result<(), ClaimError> {
        self.channel_mut()?.website_url = url.into();
        Ok(())
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), ClaimError> {
        self.channel_mut()?.email = email.into();
        Ok(())
    }

    pub fn set_cover(&mut self, url: Option<String>) -> Result<(), ClaimError> {
        self.channel_mut()?.cover = url.map(v2::Source::from_url);
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Signature state
    // ------------------------------------------------------------------------

    /// Attach an externally produced signature, replacing any previous one.
    pub fn attach_signature(&mut self, block: SignatureBlock) -> Result<(), ClaimError> {
        if self.version == ClaimVersion::Legacy {
            return Err(ClaimError::LegacyReadOnly { field: "signature" });
        }
        block.check_for(self.generation)?;
        self.signature = Some(block);
        self.version = ClaimVersion::Signed;
        Ok(())
    }

    /// Drop the signature, returning it.
    ///
    /// Signed records become unsigned; legacy records stay legacy.
    pub fn remove_signature(&mut self) -> Option<SignatureBlock> {
        let removed = self.signature.take();
        if self.version == ClaimVersion::Signed {
            self.version = ClaimVersion::Unsigned;
        }
        removed
    }

    /// Copy of this record without its signature.
    pub fn unsigned(&self) -> ClaimRecord {
        let mut copy = self.clone();
        copy.remove_signature();
        copy
    }

    // ------------------------------------------------------------------------
    // Migration
    // ------------------------------------------------------------------------

    /// Editable second-generation copy of this record.
    ///
    /// First-generation streams and certificates are migrated field by field
    /// into a fresh unsigned record; the old signature cannot cover the new
    /// bytes and is dropped. Second-generation records are cloned as-is.
    pub fn upgrade(&self) -> Result<ClaimRecord, ClaimError> {
        let claim = match &self.payload {
            Payload::Current(_) => return Ok(self.clone()),
            Payload::LegacyStream(stream) => migrate_stream(stream),
            Payload::LegacyCertificate(certificate) => {
                if KeyType::from_code(certificate.key_type) != Some(KeyType::Secp256k1) {
                    return Err(ClaimError::InvalidKeyEncoding {
                        reason: "only secp256k1 certificates can be upgraded".to_string(),
                    });
                }
                decode_public_key(&certificate.public_key)?;
                v2::Claim {
                    kind: Some(v2::claim::Kind::Channel(v2::Channel {
                        public_key: certificate.public_key.clone(),
                        ..Default::default()
                    })),
                    ..Default::default()
                }
            }
        };
        ClaimRecord::from_claim(claim)
    }
}

fn variant_of(kind: &v2::claim::Kind) -> ClaimVariant {
    match kind {
        v2::claim::Kind::Stream(_) => ClaimVariant::Stream,
        v2::claim::Kind::Collection(_) => ClaimVariant::Collection,
        v2::claim::Kind::Channel(_) => ClaimVariant::Channel,
        v2::claim::Kind::Repost(_) => ClaimVariant::Repost,
    }
}

fn migrate_stream(stream: &legacy::Stream) -> v2::Claim {
    let metadata = &stream.metadata;

    let source = v2::Source {
        sd_hash: if stream.source.source_type == LEGACY_SD_HASH_SOURCE {
            stream.source.source.clone()
        } else {
            Vec::new()
        },
        media_type: stream.source.content_type.clone(),
        ..Default::default()
    };

    let fee = metadata.fee.as_ref().map(|fee| v2::Fee {
        currency: fee.currency,
        address: fee.address.clone(),
        amount: legacy_fee_base_units(fee),
    });

    let mut tags = Vec::new();
    if metadata.nsfw {
        tags.push(MATURE_TAG.to_string());
    }

    let languages = if metadata.language != 0 {
        vec![v2::Language::new(metadata.language)]
    } else {
        Vec::new()
    };

    v2::Claim {
        kind: Some(v2::claim::Kind::Stream(v2::Stream {
            source: Some(source),
            author: metadata.author.clone(),
            license: metadata.license.clone(),
            license_url: metadata.license_url.clone().unwrap_or_default(),
            fee,
            ..Default::default()
        })),
        title: metadata.title.clone(),
        description: metadata.description.clone(),
        thumbnail: metadata.thumbnail.clone().map(v2::Source::from_url),
        tags,
        languages,
        ..Default::default()
    }
}

/// Whole-unit float amount to the currency's smallest unit.
fn legacy_fee_base_units(fee: &legacy::Fee) -> u64 {
    let scale = match v2::Currency::try_from(fee.currency) {
        Ok(v2::Currency::Usd) => 100.0,
        Ok(v2::Currency::Lbc) | Ok(v2::Currency::Btc) => 100_000_000.0,
        _ => 1.0,
    };
    let amount = (f64::from(fee.amount) * scale).round();
    if amount.is_finite() && amount > 0.0 {
        amount as u64
    } else {
        0
    }
}

// ============================================================================
// Read views
// ============================================================================

/// Stream payload of either generation.
#[derive(Debug, Clone, Copy)]
pub enum StreamRef<'a> {
    Current(&'a v2::Stream),
    Legacy(&'a legacy::Stream),
}

impl<'a> StreamRef<'a> {
    pub fn author(&self) -> &'a str {
        match *self {
            StreamRef::Current(stream) => &stream.author,
            StreamRef::Legacy(stream) => &stream.metadata.author,
        }
    }

    pub fn license(&self) -> &'a str {
        match *self {
            StreamRef::Current(stream) => &stream.license,
            StreamRef::Legacy(stream) => &stream.metadata.license,
        }
    }

    pub fn license_url(&self) -> Option<&'a str> {
        match *self {
            StreamRef::Current(stream) => {
                Some(stream.license_url.as_str()).filter(|url| !url.is_empty())
            }
            StreamRef::Legacy(stream) => stream.metadata.license_url.as_deref(),
        }
    }

    pub fn media_type(&self) -> &'a str {
        match *self {
            StreamRef::Current(stream) => stream
                .source
                .as_ref()
                .map(|source| source.media_type.as_str())
                .unwrap_or(""),
            StreamRef::Legacy(stream) => &stream.source.content_type,
        }
    }

    /// Stream descriptor hash.
    pub fn sd_hash(&self) -> &'a [u8] {
        match *self {
            StreamRef::Current(stream) => stream
                .source
                .as_ref()
                .map(|source| source.sd_hash.as_slice())
                .unwrap_or(&[]),
            StreamRef::Legacy(stream) => &stream.source.source,
        }
    }

    pub fn release_time(&self) -> Option<i64> {
        match *self {
            StreamRef::Current(stream) if stream.release_time != 0 => Some(stream.release_time),
            _ => None,
        }
    }

    pub fn fee(&self) -> Option<FeeRef<'a>> {
        match *self {
            StreamRef::Current(stream) => stream.fee.as_ref().map(FeeRef::Current),
            StreamRef::Legacy(stream) => stream.metadata.fee.as_ref().map(FeeRef::Legacy),
        }
    }
}

/// Channel payload of either generation.
#[derive(Debug, Clone, Copy)]
pub enum ChannelRef<'a> {
    Current(&'a v2::Channel),
    Legacy(&'a legacy::Certificate),
}

impl<'a> ChannelRef<'a> {
    /// Public key in its stored wire form.
    pub fn public_key(&self) -> &'a [u8] {
        match *self {
            ChannelRef::Current(channel) => &channel.public_key,
            ChannelRef::Legacy(certificate) => &certificate.public_key,
        }
    }

    pub fn key_type(&self) -> Option<KeyType> {
        match *self {
            ChannelRef::Current(_) => Some(KeyType::Secp256k1),
            ChannelRef::Legacy(certificate) => KeyType::from_code(certificate.key_type),
        }
    }

    /// Decode the stored key as a secp256k1 point.
    pub fn decoded_key(&self) -> Result<PublicKey, ClaimError> {
        if self.key_type() != Some(KeyType::Secp256k1) {
            return Err(ClaimError::InvalidKeyEncoding {
                reason: "channel key is not secp256k1".to_string(),
            });
        }
        decode_public_key(self.public_key())
    }

    pub fn website_url(&self) -> &'a str {
        match *self {
            ChannelRef::Current(channel) => &channel.website_url,
            ChannelRef::Legacy(_) => "",
        }
    }

    pub fn email(&self) -> &'a str {
        match *self {
            ChannelRef::Current(channel) => &channel.email,
            ChannelRef::Legacy(_) => "",
        }
    }

    pub fn cover_url(&self) -> Option<&'a str> {
        match *self {
            ChannelRef::Current(channel) => {
                channel.cover.as_ref().map(|source| source.url.as_str())
            }
            ChannelRef::Legacy(_) => None,
        }
    }
}

/// Fee of either generation.
#[derive(Debug, Clone, Copy)]
pub enum FeeRef<'a> {
    Current(&'a v2::Fee),
    Legacy(&'a legacy::Fee),
}

impl<'a> FeeRef<'a> {
    pub fn currency(&self) -> v2::Currency {
        let code = match self {
            FeeRef::Current(fee) => fee.currency,
            FeeRef::Legacy(fee) => fee.currency,
        };
        v2::Currency::try_from(code).unwrap_or(v2::Currency::UnknownCurrency)
    }

    /// Amount in the currency's smallest unit (deweys, satoshis, cents).
    pub fn base_amount(&self) -> u64 {
        match *self {
            FeeRef::Current(fee) => fee.amount,
            FeeRef::Legacy(fee) => legacy_fee_base_units(fee),
        }
    }

    /// Raw 25-byte address.
    pub fn raw_address(&self) -> &'a [u8] {
        match *self {
            FeeRef::Current(fee) => &fee.address,
            FeeRef::Legacy(fee) => &fee.address,
        }
    }

    /// Base58 address, checked against `network`.
    pub fn address(&self, network: Network) -> Result<String, ClaimError> {
        network.encode_address(self.raw_address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::AddressKind;
    use crate::types::ClaimId;
    use k256::SecretKey;

    fn legacy_stream(nsfw: bool, fee: Option<legacy::Fee>) -> ClaimRecord {
        let stream = legacy::Stream {
            version: 1,
            metadata: legacy::Metadata {
                version: 4,
                language: 1,
                title: "Game of life".into(),
                description: "Game of life gif".into(),
                author: "John Conway".into(),
                license: "Creative Commons".into(),
                nsfw,
                fee,
                thumbnail: Some("https://example.com/t.png".into()),
                ..Default::default()
            },
            source: legacy::Source {
                version: 1,
                source_type: 1,
                source: vec![0xab; 48],
                content_type: "image/gif".into(),
            },
        };
        ClaimRecord::from_parts(
            Generation::V1,
            ClaimVersion::Unsigned,
            ClaimVariant::Stream,
            Payload::LegacyStream(stream),
            None,
        )
    }

    fn test_key() -> PublicKey {
        SecretKey::from_slice(&[0x17; 32]).unwrap().public_key()
    }

    #[test]
    fn test_skeletons_are_unsigned_current() {
        for (record, variant) in [
            (ClaimRecord::new_stream_skeleton(), ClaimVariant::Stream),
            (ClaimRecord::new_channel_skeleton(), ClaimVariant::Channel),
            (ClaimRecord::new_collection_skeleton(), ClaimVariant::Collection),
            (ClaimRecord::new_repost_skeleton(), ClaimVariant::Repost),
        ] {
            assert_eq!(record.version(), ClaimVersion::Unsigned);
            assert_eq!(record.generation(), Generation::V2);
            assert_eq!(record.variant(), variant);
            assert_eq!(record.title(), "");
            assert!(record.signature().is_none());
        }
    }

    #[test]
    fn test_variant_exclusivity() {
        let record = ClaimRecord::new_channel_skeleton();
        assert!(record.channel().is_ok());
        assert!(matches!(
            record.stream(),
            Err(ClaimError::VariantMismatch {
                expected: ClaimVariant::Stream,
                actual: ClaimVariant::Channel,
            })
        ));
        assert!(record.collection().is_err());
        assert!(record.repost().is_err());
    }

    #[test]
    fn test_channel_setters() {
        let mut record = ClaimRecord::new_channel_skeleton();
        record.set_title("Channel").unwrap();
        record.set_website_url("http://homepageurl.com").unwrap();
        record.set_cover(Some("http://cover".into())).unwrap();
        record.set_public_key(&test_key()).unwrap();

        let channel = record.channel().unwrap();
        assert_eq!(channel.website_url(), "http://homepageurl.com");
        assert_eq!(channel.cover_url(), Some("http://cover"));
        assert_eq!(channel.decoded_key().unwrap(), test_key());
        assert_eq!(record.title(), "Channel");
    }

    #[test]
    fn test_channel_setter_on_stream_mismatches() {
        let mut record = ClaimRecord::new_stream_skeleton();
        assert!(matches!(
            record.set_website_url("x"),
            Err(ClaimError::VariantMismatch { .. })
        ));
    }

    #[test]
    fn test_tags_and_thumbnail() {
        let mut record = ClaimRecord::new_stream_skeleton();
        record.set_tags(["a", "b"]).unwrap();
        record.add_tag(MATURE_TAG).unwrap();
        record.set_thumbnail(Some("http://thumb".into())).unwrap();
        assert_eq!(record.tags(), ["a", "b", "mature"]);
        assert!(record.is_mature());
        assert_eq!(record.thumbnail(), Some("http://thumb"));
        record.set_thumbnail(None).unwrap();
        assert_eq!(record.thumbnail(), None);
    }

    #[test]
    fn test_replace_payload_switches_variant() {
        let mut record = ClaimRecord::new_stream_skeleton();
        record
            .replace_payload(v2::Claim {
                kind: Some(v2::claim::Kind::Repost(v2::ClaimReference {
                    claim_hash: vec![1; 20],
                })),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(record.variant(), ClaimVariant::Repost);
        assert_eq!(record.repost().unwrap().claim_hash, vec![1; 20]);
        assert!(record.stream().is_err());
    }

    #[test]
    fn test_replace_payload_requires_variant() {
        let mut record = ClaimRecord::new_stream_skeleton();
        assert!(record.replace_payload(v2::Claim::default()).is_err());
        assert_eq!(record.variant(), ClaimVariant::Stream);
    }

    #[test]
    fn test_legacy_reads() {
        let record = legacy_stream(false, None);
        assert_eq!(record.title(), "Game of life");
        assert_eq!(record.languages().as_ref(), &[v2::Language::new(1)]);
        assert!(record.tags().is_empty());
        let stream = record.stream().unwrap();
        assert_eq!(stream.author(), "John Conway");
        assert_eq!(stream.media_type(), "image/gif");
        assert_eq!(stream.sd_hash().len(), 48);
    }

    #[test]
    fn test_legacy_is_read_only() {
        let mut record = legacy_stream(false, None);
        assert!(matches!(
            record.set_title("x"),
            Err(ClaimError::LegacyReadOnly { field: "title" })
        ));
        assert!(matches!(
            record.stream_mut(),
            Err(ClaimError::LegacyReadOnly { .. })
        ));
    }

    #[test]
    fn test_upgrade_legacy_stream() {
        let fee = legacy::Fee {
            version: 1,
            currency: 1,
            address: vec![0x55; 25],
            amount: 1.5,
        };
        let upgraded = legacy_stream(true, Some(fee)).upgrade().unwrap();
        assert_eq!(upgraded.generation(), Generation::V2);
        assert_eq!(upgraded.version(), ClaimVersion::Unsigned);
        assert_eq!(upgraded.title(), "Game of life");
        assert_eq!(upgraded.tags(), [MATURE_TAG]);
        assert_eq!(upgraded.thumbnail(), Some("https://example.com/t.png"));

        let stream = upgraded.stream().unwrap();
        assert_eq!(stream.author(), "John Conway");
        assert_eq!(stream.sd_hash(), &[0xab; 48]);
        let fee = stream.fee().unwrap();
        assert_eq!(fee.currency(), v2::Currency::Lbc);
        assert_eq!(fee.base_amount(), 150_000_000);
    }

    #[test]
    fn test_upgrade_usd_fee_to_cents() {
        let fee = legacy::Fee {
            version: 1,
            currency: 3,
            address: Vec::new(),
            amount: 0.99,
        };
        let upgraded = legacy_stream(false, Some(fee)).upgrade().unwrap();
        assert_eq!(upgraded.stream().unwrap().fee().unwrap().base_amount(), 99);
    }

    #[test]
    fn test_fee_address_rendering() {
        let raw = Network::Mainnet.raw_address(&[0x33; 20], AddressKind::PubkeyHash);
        let mut record = ClaimRecord::new_stream_skeleton();
        record.stream_mut().unwrap().fee = Some(v2::Fee {
            currency: v2::Currency::Lbc as i32,
            address: raw.to_vec(),
            amount: 1,
        });
        let stream = record.stream().unwrap();
        let fee = stream.fee().unwrap();
        assert!(fee.address(Network::Mainnet).unwrap().starts_with('b'));
        assert!(fee.address(Network::Testnet).is_err());
    }

    #[test]
    fn test_signature_state_machine() {
        let mut record = ClaimRecord::new_stream_skeleton();
        let block = SignatureBlock::secp256k1([7; 64], ClaimId::from_bytes([9; 20]));

        record.attach_signature(block.clone()).unwrap();
        assert_eq!(record.version(), ClaimVersion::Signed);

        // edits keep the stale signature
        record.set_title("edited").unwrap();
        assert_eq!(record.version(), ClaimVersion::Signed);
        assert_eq!(record.signature(), Some(&block));

        assert_eq!(record.unsigned().version(), ClaimVersion::Unsigned);
        assert_eq!(record.remove_signature(), Some(block));
        assert_eq!(record.version(), ClaimVersion::Unsigned);
        assert_eq!(record.remove_signature(), None);
    }

    #[test]
    fn test_legacy_certificate_cannot_be_signed() {
        let mut record = ClaimRecord::from_parts(
            Generation::V1,
            ClaimVersion::Legacy,
            ClaimVariant::Channel,
            Payload::LegacyCertificate(legacy::Certificate {
                version: 1,
                key_type: 3,
                public_key: encode_public_key(&test_key()),
            }),
            None,
        );
        let block = SignatureBlock::secp256k1([7; 64], ClaimId::from_bytes([9; 20]));
        assert!(matches!(
            record.attach_signature(block),
            Err(ClaimError::LegacyReadOnly { .. })
        ));

        let upgraded = record.upgrade().unwrap();
        assert_eq!(upgraded.variant(), ClaimVariant::Channel);
        assert_eq!(upgraded.channel().unwrap().decoded_key().unwrap(), test_key());
    }
}
