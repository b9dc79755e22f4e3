//! Fluent construction of new claims.

use claimwire_schema::v2;
use k256::PublicKey;

use crate::envelope::ClaimVariant;
use crate::error::ClaimError;
use crate::pubkey::encode_public_key;
use crate::record::ClaimRecord;

/// Builder for fresh second-generation claims.
///
/// Setters for another variant's fields (a website URL on a stream, say) are
/// remembered and reported by [`ClaimBuilder::build`].
pub struct ClaimBuilder {
    record: ClaimRecord,
    error: Option<ClaimError>,
}

impl ClaimBuilder {
    fn from_skeleton(record: ClaimRecord) -> Self {
        Self {
            record,
            error: None,
        }
    }

    pub fn stream() -> Self {
        Self::from_skeleton(ClaimRecord::new_stream_skeleton())
    }

    pub fn channel() -> Self {
        Self::from_skeleton(ClaimRecord::new_channel_skeleton())
    }

    pub fn collection() -> Self {
        Self::from_skeleton(ClaimRecord::new_collection_skeleton())
    }

    /// Repost of the claim with on-chain hash `claim_hash`.
    pub fn repost(claim_hash: [u8; 20]) -> Self {
        Self::from_skeleton(ClaimRecord::new_repost_skeleton())
            .apply(|r| r.repost_mut().map(|repost| repost.claim_hash = claim_hash.to_vec()))
    }

    fn apply(mut self, f: impl FnOnce(&mut ClaimRecord) -> Result<(), ClaimError>) -> Self {
        if self.error.is_none() {
            if let Err(e) = f(&mut self.record) {
                self.error = Some(e);
            }
        }
        self
    }

    pub fn title(self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.apply(|r| r.set_title(title))
    }

    pub fn description(self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.apply(|r| r.set_description(description))
    }

    pub fn tag(self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.apply(|r| r.add_tag(tag))
    }

    pub fn language(self, language: v2::Language) -> Self {
        self.apply(|r| {
            let mut languages = r.languages().into_owned();
            languages.push(language);
            r.set_languages(languages)
        })
    }

    pub fn location(self, location: v2::Location) -> Self {
        self.apply(|r| {
            let mut locations = r.locations().to_vec();
            locations.push(location);
            r.set_locations(locations)
        })
    }

    pub fn thumbnail(self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.apply(|r| r.set_thumbnail(Some(url)))
    }

    // Channel fields

    pub fn public_key(self, key: &PublicKey) -> Self {
        let der = encode_public_key(key);
        self.apply(|r| r.channel_mut().map(|channel| channel.public_key = der))
    }

    pub fn website_url(self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.apply(|r| r.set_website_url(url))
    }

    pub fn email(self, email: impl Into<String>) -> Self {
        let email = email.into();
        self.apply(|r| r.set_email(email))
    }

    pub fn cover(self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.apply(|r| r.set_cover(Some(url)))
    }

    // Stream fields

    pub fn source(self, source: v2::Source) -> Self {
        self.apply(|r| r.stream_mut().map(|stream| stream.source = Some(source)))
    }

    pub fn author(self, author: impl Into<String>) -> Self {
        let author = author.into();
        self.apply(|r| r.stream_mut().map(|stream| stream.author = author))
    }

    pub fn license(self, license: impl Into<String>) -> Self {
        let license = license.into();
        self.apply(|r| r.stream_mut().map(|stream| stream.license = license))
    }

    pub fn release_time(self, unix_seconds: i64) -> Self {
        self.apply(|r| r.stream_mut().map(|stream| stream.release_time = unix_seconds))
    }

    pub fn fee(self, fee: v2::Fee) -> Self {
        self.apply(|r| r.stream_mut().map(|stream| stream.fee = Some(fee)))
    }

    pub fn media(self, media: v2::stream::Media) -> Self {
        self.apply(|r| r.stream_mut().map(|stream| stream.media = Some(media)))
    }

    /// Finish the unsigned record, or report the first setter that failed.
    pub fn build(self) -> Result<ClaimRecord, ClaimError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.record),
        }
    }

    pub fn variant(&self) -> ClaimVariant {
        self.record.variant()
    }
}
