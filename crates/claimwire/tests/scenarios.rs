//! End-to-end flows through the codec: build, compile, sign, verify.

use claimwire::core::network::AddressKind;
use claimwire::schema::v2;
use claimwire::{
    Binding, ClaimBuilder, ClaimCodec, ClaimError, ClaimVariant, ClaimVersion, CodecConfig,
    Error, KeyType, Network,
};
use claimwire_testkit::{ChannelFixture, TEST_FIRST_INPUT};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("claimwire=debug,claimwire_core=debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_build_channel_claim() {
    init_tracing();
    let codec = ClaimCodec::default();
    let fixture = ChannelFixture::with_seed([0x42; 32]);

    let andorra = v2::Location {
        country: 6,
        ..Default::default()
    };
    let new_jersey = v2::Location {
        state: "NJ".to_string(),
        city: "some city".to_string(),
        ..Default::default()
    };
    let channel = ClaimBuilder::channel()
        .public_key(&fixture.public_key())
        .title("Test Channel Title")
        .description("Test Channel Description")
        .cover("http://testcoverurl.com")
        .tag("TagA")
        .tag("TagB")
        .tag("TagC")
        .language(v2::Language::new(v2::Language::EN))
        .language(v2::Language::new(v2::Language::ES))
        .thumbnail("http://thumbnailurl.com")
        .website_url("http://homepageurl.com")
        .location(andorra)
        .location(new_jersey)
        .build()
        .unwrap();

    let bytes = codec.compile(&channel).unwrap();
    assert_eq!(bytes[0], 0x00);

    let decoded = codec.decode(&bytes).unwrap();
    assert_eq!(decoded, channel);
    assert_eq!(codec.compile(&decoded).unwrap(), bytes);

    assert_eq!(decoded.variant(), ClaimVariant::Channel);
    assert_eq!(decoded.version(), ClaimVersion::Unsigned);
    assert_eq!(decoded.title(), "Test Channel Title");
    assert_eq!(decoded.tags(), ["TagA", "TagB", "TagC"]);
    assert_eq!(decoded.languages().len(), 2);
    assert_eq!(decoded.locations()[1].city, "some city");
    assert_eq!(decoded.thumbnail(), Some("http://thumbnailurl.com"));

    let view = decoded.channel().unwrap();
    assert_eq!(view.website_url(), "http://homepageurl.com");
    assert_eq!(view.cover_url(), Some("http://testcoverurl.com"));
    assert_eq!(view.key_type(), Some(KeyType::Secp256k1));
    assert_eq!(view.decoded_key().unwrap(), fixture.public_key());
}

#[test]
fn test_sign_stream_and_verify_against_channel() {
    init_tracing();
    let codec = ClaimCodec::default();
    let fixture = ChannelFixture::new();

    let channel = codec
        .decode(&codec.compile(&fixture.channel_claim("publisher")).unwrap())
        .unwrap();
    let stream = fixture.signed_stream("episode 1");
    let bytes = codec.compile(&stream).unwrap();
    assert_eq!(bytes[0], 0x01);
    assert_eq!(&bytes[1..21], &fixture.claim_id.claim_hash());

    let decoded = codec.decode(&bytes).unwrap();
    let key = channel.channel().unwrap().decoded_key().unwrap();
    codec
        .verify(&decoded, &key, Binding::FirstInput(&TEST_FIRST_INPUT))
        .unwrap();

    // stripping and re-attaching gives the same bytes back
    let unsigned = codec.strip(&bytes).unwrap();
    assert_eq!(unsigned[0], 0x00);
    let block = decoded.signature().unwrap();
    assert_eq!(codec.attach(&unsigned, block).unwrap(), bytes);
}

#[test]
fn test_verify_rejects_other_channel() {
    let codec = ClaimCodec::default();
    let signer = ChannelFixture::new();
    let other = ChannelFixture::new();

    let stream = signer.signed_stream("x");
    assert!(matches!(
        codec.verify(&stream, &other.public_key(), Binding::FirstInput(&TEST_FIRST_INPUT)),
        Err(Error::Claim(ClaimError::SignatureMismatch))
    ));
}

#[test]
fn test_fee_address_uses_configured_network() {
    let raw = Network::Testnet.raw_address(&[0x09; 20], AddressKind::PubkeyHash);
    let stream = ClaimBuilder::stream()
        .title("paid")
        .fee(v2::Fee {
            currency: v2::Currency::Lbc as i32,
            address: raw.to_vec(),
            amount: 100_000_000,
        })
        .build()
        .unwrap();

    let testnet = ClaimCodec::new(CodecConfig {
        network: Network::Testnet,
        ..Default::default()
    });
    let address = testnet.fee_address(&stream).unwrap().unwrap();
    assert_eq!(Network::Testnet.decode_address(&address).unwrap(), raw);

    // the same bytes are not a mainnet address
    assert!(matches!(
        ClaimCodec::default().fee_address(&stream),
        Err(Error::Claim(ClaimError::InvalidAddress { .. }))
    ));
}

#[test]
fn test_claim_id_from_outpoint() {
    let codec = ClaimCodec::default();
    let txid = "bd9fa7ffd57d810d4ce14de76beea29d847b8ac34e8e536802534ecb1ca43b68";
    let id = codec.claim_id(txid, 1).unwrap();
    assert_eq!(id, claimwire::ClaimId::from_outpoint(txid, 1).unwrap());

    assert!(codec.claim_id("not hex", 0).is_err());
}

#[test]
fn test_config_from_json() {
    let config: CodecConfig =
        serde_json::from_str(r#"{"network": "regtest", "max_claim_size": 1024}"#).unwrap();
    let codec = ClaimCodec::new(config);
    assert_eq!(codec.network(), Network::Regtest);
    assert_eq!(codec.config().max_claim_size, 1024);

    let json = serde_json::to_value(CodecConfig::default()).unwrap();
    assert_eq!(json["network"], "mainnet");
    assert_eq!(json["max_claim_size"], 8192);
}

#[test]
fn test_wrong_variant_setter_is_reported() {
    let result = ClaimBuilder::collection().author("someone").build();
    assert!(matches!(
        result,
        Err(ClaimError::VariantMismatch {
            expected: ClaimVariant::Stream,
            actual: ClaimVariant::Collection,
        })
    ));
}
