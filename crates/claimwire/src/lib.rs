//! # Claimwire
//!
//! The unified API for reading and writing blockchain claim metadata.
//!
//! ## Overview
//!
//! Claim values stored on chain come in three wire layouts:
//!
//! - **Legacy**: the first-generation flat protobuf envelope, read-only
//! - **Unsigned**: a `0x00` marker followed by a second-generation claim
//! - **Signed**: a `0x01` marker, the signing channel's claim hash and a
//!   64-byte signature, then the claim
//!
//! A [`ClaimCodec`] decodes any of them into a [`ClaimRecord`] and compiles
//! records back. Decoding and compiling are exact inverses: every value that
//! decodes compiles back to the same bytes.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use claimwire::{ClaimBuilder, ClaimCodec, CodecConfig};
//!
//! fn example() -> claimwire::Result<()> {
//!     let codec = ClaimCodec::new(CodecConfig::default());
//!
//!     // Build and compile a new channel
//!     let channel = ClaimBuilder::channel()
//!         .title("My Channel")
//!         .tag("music")
//!         .build()?;
//!     let bytes = codec.compile(&channel)?;
//!
//!     // Read it back
//!     let decoded = codec.decode(&bytes)?;
//!     assert_eq!(decoded.title(), "My Channel");
//!     Ok(())
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `claimwire::core` - envelope, record, signature and compiler primitives
//! - `claimwire::schema` - the protobuf message definitions

pub mod codec;
pub mod error;

pub use claimwire_core as core;
pub use claimwire_core::schema;

pub use codec::{ClaimCodec, CodecConfig, DEFAULT_MAX_CLAIM_SIZE};
pub use error::{Error, Result};

pub use claimwire_core::{
    sign_claim, verify_claim, Binding, ClaimBuilder, ClaimError, ClaimId, ClaimRecord,
    ClaimVariant, ClaimVersion, Generation, KeyType, Network, SignatureBlock,
};
