//! Subcommand execution against a configured core.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use seedphrase_core::config::SeedPhraseConfig;
use seedphrase_core::encoding::{from_hex, to_hex};
use seedphrase_core::wordlist::Wordlist;
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::cli::Command;

/// Load and validate a custom wordlist file.
pub fn load_wordlist(path: &Path) -> Result<Wordlist> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read wordlist {}", path.display()))?;
    let list = Wordlist::parse(&text)
        .with_context(|| format!("invalid wordlist {}", path.display()))?;
    info!(path = %path.display(), "loaded custom wordlist");
    Ok(list)
}

/// Run `command`, writing results to `out`.
///
/// Returns `Ok(false)` when the input phrase was rejected (decode,
/// validate); `Err` for usage and I/O errors.
pub fn run(
    command: &Command,
    config: &SeedPhraseConfig<'_>,
    stdin: &mut impl Read,
    out: &mut impl Write,
) -> Result<bool> {
    match command {
        Command::Generate { strength } => {
            let m = config.with_strength(*strength).generate()?;
            writeln!(out, "{m}")?;
            Ok(true)
        }
        Command::Encode { entropy } => {
            let entropy = Zeroizing::new(from_hex(entropy.trim())?);
            let m = config.encode(&entropy)?;
            writeln!(out, "{m}")?;
            Ok(true)
        }
        Command::Decode { phrase } => {
            let phrase = read_phrase(phrase.as_deref(), stdin)?;
            match config.try_decode(&phrase) {
                Ok(entropy) => {
                    let entropy = Zeroizing::new(entropy);
                    writeln!(out, "{}", to_hex(&entropy))?;
                    Ok(true)
                }
                Err(reason) => {
                    warn!(%reason, "invalid mnemonic");
                    Ok(false)
                }
            }
        }
        Command::Validate { phrase } => {
            let phrase = read_phrase(phrase.as_deref(), stdin)?;
            let valid = config.validate(&phrase);
            writeln!(out, "{}", if valid { "valid" } else { "invalid" })?;
            Ok(valid)
        }
        Command::Derive { phrase, passphrase } => {
            let phrase = read_phrase(phrase.as_deref(), stdin)?;
            if !config.validate(&phrase) {
                warn!("deriving seed from a mnemonic that fails validation");
            }
            let seed = config.derive(&phrase, passphrase);
            writeln!(out, "{}", seed.to_hex())?;
            Ok(true)
        }
    }
}

fn read_phrase(arg: Option<&str>, stdin: &mut impl Read) -> Result<Zeroizing<String>> {
    if let Some(phrase) = arg {
        return Ok(Zeroizing::new(phrase.to_owned()));
    }
    debug!("reading mnemonic from stdin");
    let mut buf = Zeroizing::new(String::new());
    stdin
        .read_to_string(&mut buf)
        .context("failed to read mnemonic from stdin")?;
    if buf.trim().is_empty() {
        bail!("no mnemonic given");
    }
    Ok(buf)
}
