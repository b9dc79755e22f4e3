//! # Claimwire Schema
//!
//! The payload schemas carried inside claim envelopes, expressed as `prost`
//! messages. These layouts are an external, versioned contract: field numbers
//! and wire types here must never change.
//!
//! - [`v2`] - the current schema (stream, channel, collection, repost)
//! - [`legacy`] - the first schema generation (stream and certificate)
//!
//! This crate contains no envelope or signature logic; see `claimwire-core`.

pub mod legacy;
pub mod v2;

pub use prost::Message;
