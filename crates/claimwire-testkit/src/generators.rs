//! Proptest generators for property-based testing.

use proptest::prelude::*;

use claimwire_core::schema::v2;
use claimwire_core::{ClaimBuilder, ClaimId, ClaimRecord, ClaimVariant};
use k256::ecdsa::SigningKey;

/// Generate a random ClaimId.
pub fn claim_id() -> impl Strategy<Value = ClaimId> {
    any::<[u8; 20]>().prop_map(ClaimId::from_bytes)
}

/// Generate a signing key.
pub fn signing_key() -> impl Strategy<Value = SigningKey> {
    any::<[u8; 32]>().prop_filter_map("not a valid scalar", |seed| {
        SigningKey::from_slice(&seed).ok()
    })
}

/// Generate a short human-readable string.
pub fn text(max_len: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[ -~]{{0,{max_len}}}"))
        .expect("valid regex")
}

pub fn tag() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,15}".prop_map(String::from)
}

pub fn language() -> impl Strategy<Value = v2::Language> {
    (1i32..=180).prop_map(v2::Language::new)
}

pub fn location() -> impl Strategy<Value = v2::Location> {
    (0i32..=250, "[A-Z]{0,2}", "[a-z ]{0,12}").prop_map(|(country, state, city)| v2::Location {
        country,
        state,
        city,
        ..Default::default()
    })
}

pub fn variant() -> impl Strategy<Value = ClaimVariant> {
    prop_oneof![
        Just(ClaimVariant::Stream),
        Just(ClaimVariant::Channel),
        Just(ClaimVariant::Collection),
        Just(ClaimVariant::Repost),
    ]
}

/// Parameters for generating an unsigned claim.
#[derive(Debug, Clone)]
pub struct ClaimParams {
    pub variant: ClaimVariant,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub languages: Vec<v2::Language>,
    pub locations: Vec<v2::Location>,
    pub thumbnail: Option<String>,
    /// Author for streams, website for channels, ignored otherwise.
    pub detail: String,
    pub repost_target: [u8; 20],
}

impl Arbitrary for ClaimParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            variant(),
            text(64),
            text(256),
            prop::collection::vec(tag(), 0..5),
            prop::collection::vec(language(), 0..3),
            prop::collection::vec(location(), 0..3),
            prop::option::of("https://[a-z]{1,10}\\.com/[a-z]{0,8}"),
            text(32),
            any::<[u8; 20]>(),
        )
            .prop_map(
                |(
                    variant,
                    title,
                    description,
                    tags,
                    languages,
                    locations,
                    thumbnail,
                    detail,
                    repost_target,
                )| ClaimParams {
                    variant,
                    title,
                    description,
                    tags,
                    languages,
                    locations,
                    thumbnail,
                    detail,
                    repost_target,
                },
            )
            .boxed()
    }
}

/// Build a claim from parameters.
pub fn claim_from_params(params: &ClaimParams) -> ClaimRecord {
    let mut builder = match params.variant {
        ClaimVariant::Stream => ClaimBuilder::stream().author(params.detail.clone()),
        ClaimVariant::Channel => ClaimBuilder::channel().website_url(params.detail.clone()),
        ClaimVariant::Collection => ClaimBuilder::collection(),
        ClaimVariant::Repost => ClaimBuilder::repost(params.repost_target),
    }
    .title(params.title.clone())
    .description(params.description.clone());

    for tag in &params.tags {
        builder = builder.tag(tag.clone());
    }
    for language in &params.languages {
        builder = builder.language(language.clone());
    }
    for location in &params.locations {
        builder = builder.location(location.clone());
    }
    if let Some(url) = &params.thumbnail {
        builder = builder.thumbnail(url.clone());
    }

    builder.build().expect("setters match the variant")
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimwire_core::{
        compile, decode, sign_claim, strip_signature, verify_claim, Binding, ClaimVersion,
    };
    use k256::PublicKey;

    proptest! {
        #[test]
        fn test_compile_decode_identity(params: ClaimParams) {
            let record = claim_from_params(&params);
            let bytes = compile(&record).unwrap();
            let decoded = decode(&bytes).unwrap();

            prop_assert_eq!(&decoded, &record);
            prop_assert_eq!(compile(&decoded).unwrap(), bytes);
        }

        #[test]
        fn test_accessors_see_builder_values(params: ClaimParams) {
            let record = claim_from_params(&params);

            prop_assert_eq!(record.variant(), params.variant);
            prop_assert_eq!(record.title(), params.title.as_str());
            prop_assert_eq!(record.tags(), params.tags.as_slice());
            prop_assert_eq!(record.thumbnail(), params.thumbnail.as_deref());
        }

        #[test]
        fn test_signed_claims_verify_and_strip(
            params: ClaimParams,
            key in signing_key(),
            channel in claim_id(),
        ) {
            let mut record = claim_from_params(&params);
            let unsigned = compile(&record).unwrap();
            let input = [7u8; 36];
            sign_claim(&mut record, &key, channel, Binding::FirstInput(&input)).unwrap();

            let signed = compile(&record).unwrap();
            let decoded = decode(&signed).unwrap();
            prop_assert_eq!(decoded.version(), ClaimVersion::Signed);
            let public = PublicKey::from(key.verifying_key());
            prop_assert!(verify_claim(&decoded, &public, Binding::FirstInput(&input)).is_ok());

            prop_assert_eq!(strip_signature(&signed).unwrap(), unsigned);
        }

        #[test]
        fn test_arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
            if let Ok(record) = decode(&bytes) {
                prop_assert_eq!(compile(&record).unwrap(), bytes);
            }
        }
    }
}
