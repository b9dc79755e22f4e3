//! Command-line tool for claim values.
//!
//! Decodes claim values found in transaction outputs, strips their
//! signatures, and derives claim ids and channel key details.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use claimwire::core::pubkey::compressed_sec1;
use claimwire::{ClaimCodec, ClaimRecord, CodecConfig, Network, DEFAULT_MAX_CLAIM_SIZE};
use serde_json::{json, Value as J};

#[derive(Parser)]
#[command(name = "claimwire", version, about = "Inspect and rewrite claim values")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Network used for addresses (mainnet, testnet, regtest)
    #[arg(short, long, global = true, default_value = "mainnet")]
    network: Network,

    /// Largest claim value accepted, in bytes
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_CLAIM_SIZE)]
    max_size: usize,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a hex claim value and print it as JSON
    Decode {
        /// Claim value in hex (or - for stdin)
        input: String,
    },
    /// Remove the signature from a hex claim value
    Strip {
        /// Claim value in hex (or - for stdin)
        input: String,
    },
    /// Compute the claim id created by a transaction output
    ClaimId {
        /// Transaction id in hex
        txid: String,
        /// Output index
        nout: u32,
    },
    /// Show a channel public key in compressed form with its address
    Pubkey {
        /// DER-encoded public key in hex, as stored in channel claims
        der: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .init();

    let codec = ClaimCodec::new(CodecConfig {
        network: cli.network,
        max_claim_size: cli.max_size,
    });

    match cli.command {
        Commands::Decode { input } => {
            let value = read_maybe_stdin(&input)?;
            let record = codec.decode_hex(&value).context("decoding claim")?;
            let summary = summarize(&codec, &record);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Strip { input } => {
            let value = read_maybe_stdin(&input)?;
            let bytes = hex::decode(value.trim()).context("claim value is not hex")?;
            let unsigned = codec.strip(&bytes).context("stripping signature")?;
            println!("{}", hex::encode(unsigned));
        }
        Commands::ClaimId { txid, nout } => {
            let id = codec.claim_id(&txid, nout)?;
            println!("{id}");
        }
        Commands::Pubkey { der } => {
            let der = hex::decode(der.trim()).context("public key is not hex")?;
            let sec1 = compressed_sec1(&der)?;
            let raw = codec.network().raw_address_for_key(&sec1);
            let out = json!({
                "compressed": hex::encode(&sec1),
                "address": codec.network().encode_address(&raw)?,
                "network": codec.network().name(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

fn summarize(codec: &ClaimCodec, record: &ClaimRecord) -> J {
    let mut out = json!({
        "variant": record.variant().to_string(),
        "version": format!("{:?}", record.version()).to_lowercase(),
        "title": record.title(),
        "description": record.description(),
        "tags": record.tags(),
        "thumbnail": record.thumbnail(),
        "mature": record.is_mature(),
    });

    if let Some(signature) = record.signature() {
        out["signing_channel"] = json!(signature.channel_id.to_hex());
        out["signature"] = json!(hex::encode(&signature.signature));
    }

    if let Ok(stream) = record.stream() {
        out["stream"] = json!({
            "author": stream.author(),
            "license": stream.license(),
            "media_type": stream.media_type(),
            "sd_hash": hex::encode(stream.sd_hash()),
            "release_time": stream.release_time(),
        });
        if let Some(fee) = stream.fee() {
            out["stream"]["fee"] = json!({
                "currency": format!("{:?}", fee.currency()).to_uppercase(),
                "amount": fee.base_amount(),
            });
            match codec.fee_address(record) {
                Ok(address) => out["stream"]["fee"]["address"] = json!(address),
                Err(e) => {
                    tracing::warn!(error = %e, "fee address does not render");
                    out["stream"]["fee"]["address_error"] = json!(e.to_string());
                }
            }
        }
    }

    if let Ok(channel) = record.channel() {
        let key = channel.public_key();
        out["channel"] = json!({
            "public_key": hex::encode(key),
            "key_type": channel.key_type().map(|k| format!("{k:?}")),
            "website_url": channel.website_url(),
            "email": channel.email(),
            "cover_url": channel.cover_url(),
        });
        if let Ok(sec1) = compressed_sec1(key) {
            out["channel"]["compressed_key"] = json!(hex::encode(sec1));
        }
    }

    out
}

fn read_maybe_stdin(input: &str) -> Result<String> {
    if input != "-" {
        return Ok(input.to_string());
    }
    let mut s = String::new();
    io::stdin().read_to_string(&mut s)?;
    tracing::debug!(len = s.len(), "read claim from stdin");
    Ok(s)
}
