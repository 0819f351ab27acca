//! `seedphrase` — BIP-39 mnemonic command-line tool.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (default `seedphrase=info`). Results go to stdout.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use seedphrase_core::config::SeedPhraseConfig;
use tracing::error;

mod cli;
mod commands;

use crate::cli::Cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seedphrase=info,seedphrase_core=warn".into()),
        )
        .init();

    let cli = Cli::parse();
    match execute(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

fn execute(cli: &Cli) -> Result<bool> {
    let custom = cli
        .wordlist
        .as_deref()
        .map(commands::load_wordlist)
        .transpose()?;
    let config = match &custom {
        Some(list) => SeedPhraseConfig::new(list),
        None => SeedPhraseConfig::default(),
    };

    commands::run(&cli.command, &config, &mut io::stdin().lock(), &mut io::stdout().lock())
}
