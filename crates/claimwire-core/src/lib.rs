//! # Claimwire Core
//!
//! Decode and re-encode the metadata claims stored in blockchain transaction
//! outputs, across every historical wire layout.
//!
//! This crate contains no I/O and no shared state. Every operation is a pure
//! function over byte slices and owned records.
//!
//! ## Layers
//!
//! - [`wire`] - bounds-checked protobuf field framing
//! - [`envelope`] - sniffs the wire generation and signature state
//! - [`signature`] - strips and attaches signature blocks on raw bytes
//! - [`pubkey`] - channel public keys to and from their DER wire form
//! - [`record`] - [`ClaimRecord`], the unified in-memory claim
//! - [`compiler`] - `decode` / `compile`, byte-exact in both directions
//!
//! ## Round trips
//!
//! Payloads are only accepted when they are canonically encoded, so for any
//! bytes `b` that decode successfully, `compile(&decode(b)?)? == b`.

pub mod builder;
pub mod compiler;
pub mod envelope;
pub mod error;
pub mod network;
pub mod pubkey;
pub mod record;
pub mod signature;
pub mod signing;
pub mod types;
pub mod wire;

pub use builder::ClaimBuilder;
pub use compiler::{compile, compile_unsigned, decode, decode_hex, signable_payload};
pub use envelope::{parse_envelope, ClaimVariant, ClaimVersion, Envelope, Generation};
pub use error::{ClaimError, PayloadError};
pub use network::{AddressKind, Network, NetworkParams, UnknownNetwork};
pub use pubkey::{decode_public_key, encode_public_key, KeyType};
pub use record::{ChannelRef, ClaimRecord, FeeRef, Payload, StreamRef, MATURE_TAG};
pub use signature::{attach_signature, signable_bytes, strip_signature, SignatureBlock};
pub use signing::{sign_claim, signature_digest, verify_claim, verify_with_channel, Binding};
pub use types::ClaimId;

pub use claimwire_schema as schema;
