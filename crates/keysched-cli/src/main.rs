//! Command-line interface for `aes-keysched`.

#![forbid(unsafe_code)]

use std::fmt::Write as _;

use aes_keysched::{expand_key, expand_key_trace, CipherKey, ExpansionStep, KeySchedule, Word};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-128 key schedule CLI.
#[derive(Parser)]
#[command(
    name = "keysched",
    version,
    author,
    about = "Expand AES-128 keys into FIPS-197 round keys"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a key and print its schedule.
    Expand {
        /// AES-128 key as 32 hex characters.
        #[arg(
            long,
            value_name = "HEX",
            conflicts_with = "key_bytes",
            required_unless_present = "key_bytes"
        )]
        key_hex: Option<String>,
        /// AES-128 key as 16 comma-separated decimal bytes.
        #[arg(
            long,
            value_name = "BYTES",
            value_delimiter = ',',
            allow_hyphen_values = true
        )]
        key_bytes: Option<Vec<i64>>,
        /// Output layout.
        #[arg(long, value_enum, default_value_t = Format::RoundKeys)]
        format: Format,
        /// Also print every intermediate step of the expansion.
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
    /// Verify the expansion against the FIPS-197 Appendix A.1 vector.
    Check,
    /// Generate a random key and print its round keys.
    Random {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        /// Output layout.
        #[arg(long, value_enum, default_value_t = Format::RoundKeys)]
        format: Format,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Eleven 16-byte round keys, one per line.
    RoundKeys,
    /// Forty-four 4-byte words, one per line.
    Words,
    /// The whole 176-byte schedule as a single hex string.
    Raw,
}

const FIPS_KEY_HEX: &str = "2b7e151628aed2a6abf7158809cf4f3c";

const FIPS_ROUND_KEYS: [&str; 11] = [
    "2b7e151628aed2a6abf7158809cf4f3c",
    "a0fafe1788542cb123a339392a6c7605",
    "f2c295f27a96b9435935807a7359f67f",
    "3d80477d4716fe3e1e237e446d7a883b",
    "ef44a541a8525b7fb671253bdb0bad00",
    "d4d1c6f87c839d87caf2b8bc11f915bc",
    "6d88a37a110b3efddbf98641ca0093fd",
    "4e54f70e5f5fc9f384a64fb24ea6dc4f",
    "ead27321b58dbad2312bf5607f8d292f",
    "ac7766f319fadc2128d12941575c006e",
    "d014f9a8c9ee2589e13f0cc8b6630ca6",
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Expand {
            key_hex,
            key_bytes,
            format,
            trace,
        } => cmd_expand(key_hex.as_deref(), key_bytes.as_deref(), format, trace),
        Commands::Check => cmd_check(),
        Commands::Random { seed, format } => cmd_random(seed, format),
    }
}

fn cmd_expand(
    key_hex: Option<&str>,
    key_bytes: Option<&[i64]>,
    format: Format,
    trace: bool,
) -> Result<()> {
    let key = match (key_hex, key_bytes) {
        (Some(hex_str), None) => parse_key_hex(hex_str)?,
        (None, Some(values)) => CipherKey::from_values(values).context("parse --key-bytes")?,
        _ => bail!("exactly one of --key-hex or --key-bytes is required"),
    };
    if trace {
        print!("{}", render_trace(&expand_key_trace(&key)));
    }
    print!("{}", render(&expand_key(&key), format));
    Ok(())
}

fn cmd_check() -> Result<()> {
    let key = parse_key_hex(FIPS_KEY_HEX)?;
    let schedule = expand_key(&key);
    for (round, (actual, expected)) in schedule
        .round_keys()
        .iter()
        .zip(FIPS_ROUND_KEYS.iter())
        .enumerate()
    {
        let actual = hex::encode(actual);
        if actual != *expected {
            bail!("round key {round} mismatch: got {actual}, expected {expected}");
        }
    }
    println!("ok");
    Ok(())
}

fn cmd_random(seed: Option<u64>, format: Format) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let key = CipherKey::from(key_bytes);
    println!("key: {}", hex::encode(key.as_bytes()));
    print!("{}", render(&expand_key(&key), format));
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<CipherKey> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    CipherKey::try_from(bytes.as_slice()).context("AES-128 key must be 16 bytes (32 hex characters)")
}

fn render(schedule: &KeySchedule, format: Format) -> String {
    let mut out = String::new();
    match format {
        Format::RoundKeys => {
            for (round, key) in schedule.round_keys().iter().enumerate() {
                let _ = writeln!(out, "round {round:02}: {}", hex::encode(key));
            }
        }
        Format::Words => {
            for (i, word) in schedule.words().iter().enumerate() {
                let _ = writeln!(out, "w[{i:02}]: {}", hex::encode(word));
            }
        }
        Format::Raw => {
            let _ = writeln!(out, "{}", hex::encode(schedule.to_bytes()));
        }
    }
    out
}

fn cell(word: Option<Word>) -> String {
    word.map(hex::encode).unwrap_or_else(|| "-".repeat(8))
}

/// Renders the expansion in the column layout of FIPS-197 Appendix A.
fn render_trace(steps: &[ExpansionStep]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>2}  {:8}  {:8}  {:8}  {:8}  {:8}  {:8}  {:8}",
        "i", "temp", "rot", "sub", "rcon", "xor rcon", "w[i-4]", "w[i]"
    );
    for step in steps {
        let _ = writeln!(
            out,
            "{:>2}  {}  {}  {}  {}  {}  {}  {}",
            step.index,
            hex::encode(step.temp),
            cell(step.rotated),
            cell(step.substituted),
            cell(step.rcon),
            hex::encode(step.after_rcon),
            hex::encode(step.previous),
            hex::encode(step.result),
        );
    }
    out
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}
