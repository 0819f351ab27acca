//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use seedphrase_core::strength::Strength;

#[derive(Parser, Debug)]
#[command(name = "seedphrase")]
#[command(about = "BIP-39 mnemonic generation, validation and seed derivation", long_about = None)]
pub struct Cli {
    /// Custom 2048-word list, one word per line (default: built-in English)
    #[arg(long, global = true, env = "SEEDPHRASE_WORDLIST")]
    pub wordlist: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new mnemonic from OS randomness
    Generate {
        /// Entropy bits: 128, 160, 192, 224 or 256
        #[arg(long, short, env = "SEEDPHRASE_STRENGTH", default_value = "256", value_parser = parse_strength)]
        strength: Strength,
    },
    /// Encode hex entropy as a mnemonic
    Encode {
        /// 32, 40, 48, 56 or 64 hex digits
        entropy: String,
    },
    /// Print the hex entropy of a mnemonic (reads stdin if omitted)
    Decode { phrase: Option<String> },
    /// Exit 0 if the mnemonic is valid, 1 otherwise (reads stdin if omitted)
    Validate { phrase: Option<String> },
    /// Print the hex seed of a mnemonic (reads stdin if omitted)
    Derive {
        phrase: Option<String>,

        /// BIP-39 passphrase ("25th word")
        #[arg(long, short, env = "SEEDPHRASE_PASSPHRASE", default_value = "", hide_env_values = true)]
        passphrase: String,
    },
}

fn parse_strength(s: &str) -> Result<Strength, String> {
    let bits: u32 = s.parse().map_err(|e| format!("{e}"))?;
    Strength::from_bits(bits).map_err(|e| e.to_string())
}
