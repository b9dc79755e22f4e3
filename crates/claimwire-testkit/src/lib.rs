//! # Claimwire Testkit
//!
//! Testing utilities for the claim codec.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Claim vectors**: Claim values captured from chain, with what they decode to
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Signing channels for setting up test scenarios
//!
//! ## Claim Vectors
//!
//! Every captured value must decode and compile back byte for byte:
//!
//! ```rust
//! use claimwire_testkit::vectors::{all_vectors, check_vector};
//!
//! for vector in all_vectors() {
//!     let record = check_vector(&vector).unwrap();
//!     println!("{}: {}", vector.name, record.variant());
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use claimwire_testkit::generators::{claim_from_params, ClaimParams};
//!
//! proptest! {
//!     #[test]
//!     fn compile_is_deterministic(params: ClaimParams) {
//!         let r1 = claim_from_params(&params);
//!         let r2 = claim_from_params(&params);
//!         prop_assert_eq!(r1.compile().unwrap(), r2.compile().unwrap());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use claimwire_testkit::fixtures::ChannelFixture;
//!
//! let channel = ChannelFixture::new();
//! let stream = channel.signed_stream("my stream");
//! assert!(stream.is_signed());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_channel_fixtures, ChannelFixture, TEST_FIRST_INPUT};
pub use generators::{claim_from_params, ClaimParams};
pub use vectors::{all_vectors, check_vector, verify_all_vectors, ClaimVector};
