//! Test fixtures and helpers.
//!
//! Common setup code for signing tests: a channel with its key and claim id.

use claimwire_core::{sign_claim, Binding, ClaimBuilder, ClaimId, ClaimRecord};
use k256::ecdsa::SigningKey;
use k256::PublicKey;

/// Outpoint bytes used as the first input when no real transaction exists.
pub const TEST_FIRST_INPUT: [u8; 36] = [0x5a; 36];

/// A channel that can sign claims.
pub struct ChannelFixture {
    pub signing_key: SigningKey,
    pub claim_id: ClaimId,
}

impl ChannelFixture {
    /// Create a new fixture with a random key and claim id.
    pub fn new() -> Self {
        let signing_key = SigningKey::random(&mut rand::rngs::OsRng);
        let claim_id = ClaimId::from_bytes(rand::random());
        Self {
            signing_key,
            claim_id,
        }
    }

    /// Create with a deterministic key from seed.
    ///
    /// The seed must be a valid secp256k1 scalar (non-zero, below the order).
    pub fn with_seed(seed: [u8; 32]) -> Self {
        let signing_key = SigningKey::from_slice(&seed).expect("seed is a valid scalar");
        let claim_id = ClaimId::from_bytes(claimwire_core::types::hash160(&seed));
        Self {
            signing_key,
            claim_id,
        }
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey::from(self.signing_key.verifying_key())
    }

    /// The channel's own claim, carrying its public key.
    pub fn channel_claim(&self, title: &str) -> ClaimRecord {
        ClaimBuilder::channel()
            .title(title)
            .public_key(&self.public_key())
            .build()
            .expect("channel fields on a channel")
    }

    /// A stream titled `title`, signed by this channel over [`TEST_FIRST_INPUT`].
    pub fn signed_stream(&self, title: &str) -> ClaimRecord {
        let mut record = ClaimBuilder::stream()
            .title(title)
            .build()
            .expect("common fields on a stream");
        self.sign(&mut record);
        record
    }

    /// Sign `record` over [`TEST_FIRST_INPUT`].
    pub fn sign(&self, record: &mut ClaimRecord) {
        sign_claim(
            record,
            &self.signing_key,
            self.claim_id,
            Binding::FirstInput(&TEST_FIRST_INPUT),
        )
        .expect("second-generation records accept signatures");
    }
}

impl Default for ChannelFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple channel fixtures with distinct deterministic keys.
pub fn multi_channel_fixtures(count: usize) -> Vec<ChannelFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0x11u8; 32];
            seed[0] = i as u8;
            ChannelFixture::with_seed(seed)
        })
        .collect()
}
