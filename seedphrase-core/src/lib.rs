//! Seedphrase Core — BIP-39 mnemonic reference implementation.
//!
//! Converts entropy to a checksummed word sequence, recovers and verifies
//! entropy from such a sequence, and derives the 64-byte wallet seed.
//! The browser bindings (`seedphrase-wasm`) and the CLI (`seedphrase-cli`)
//! are thin adapters over this crate and MUST NOT re-implement any of it.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`constants`] | BIP-39 fixed values |
//! | [`errors`] | Hard errors and decode rejection reasons |
//! | [`encoding`] | Hex for entropy and seeds |
//! | [`hash`] | SHA-256, PBKDF2-HMAC-SHA-512 |
//! | [`normalize`] | NFKD + whitespace normalization |
//! | [`wordlist`] | 2048-word tables, English embedded |
//! | [`strength`] | The five entropy sizes |
//! | [`mnemonic`] | Encoder, Decoder, Validator |
//! | [`seed`] | SeedDeriver |
//! | [`config`] | Wordlist + strength injection |
//! | [`vectors`] | Golden vector generator (test-only) |
//!
//! # Example
//!
//! ```
//! use seedphrase_core::{mnemonic, seed};
//!
//! let m = mnemonic::encode(&[0u8; 16]).unwrap();
//! assert!(m.as_str().ends_with("abandon about"));
//! assert_eq!(mnemonic::decode(m.as_str()), Some(vec![0u8; 16]));
//! assert_eq!(seed::derive(m.as_str(), "").as_bytes().len(), 64);
//! ```

/// BIP-39 constants.
pub mod constants;

/// Error types for seedphrase-core operations.
pub mod errors;

/// Encoding utilities — hex.
pub mod encoding;

/// Hashing utilities — SHA-256 and PBKDF2.
pub mod hash;

/// Mnemonic text normalization.
pub mod normalize;

/// Wordlists and index ↔ word lookup.
pub mod wordlist;

/// Entropy strength.
pub mod strength;

/// Encoder, Decoder, Validator.
pub mod mnemonic;

/// Seed derivation.
pub mod seed;

/// Runtime configuration.
pub mod config;

/// Deterministic golden vector generator (test use only).
/// Requires the `vectors` feature: `cargo test --features vectors`.
#[cfg(feature = "vectors")]
pub mod vectors;
