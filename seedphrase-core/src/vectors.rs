//! Deterministic golden vector generator.
//!
//! Produces the JSON committed at `tests/vectors/bip39.vectors.json`.
//! `tests/vector_equivalence.rs` regenerates it and fails on any drift,
//! which pins encoder output and seed derivation to the published
//! BIP-39 English vectors.

use serde::Serialize;

use crate::encoding::{from_hex, to_hex};
use crate::mnemonic;
use crate::seed;

/// Passphrase used by the published BIP-39 reference vectors.
pub const VECTOR_PASSPHRASE: &str = "TREZOR";

/// Entropy inputs, one or more per strength.
pub const VECTOR_ENTROPY_HEX: [&str; 12] = [
    "00000000000000000000000000000000",
    "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
    "80808080808080808080808080808080",
    "ffffffffffffffffffffffffffffffff",
    "0000000000000000000000000000000000000000",
    "000000000000000000000000000000000000000000000000",
    "00000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
    "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    "9e885d952ad362caeb4efe34a8e91bd2",
    "f585c11aec520db57dd353c69554b21a89b20fb0650966fa0a9d6f74fd989d8f",
];

#[derive(Serialize)]
struct VectorFile {
    version: u32,
    description: &'static str,
    passphrase: &'static str,
    cases: Vec<VectorCase>,
}

#[derive(Serialize)]
struct VectorCase {
    entropy_hex: String,
    mnemonic: String,
    seed_hex: String,
}

/// Generate the BIP-39 vector file as pretty-printed JSON.
///
/// Panics only if the fixed inputs above are malformed.
pub fn generate_bip39_json() -> String {
    let cases = VECTOR_ENTROPY_HEX
        .iter()
        .map(|hex| {
            let entropy = from_hex(hex).expect("vector entropy is valid hex");
            let m = mnemonic::encode(&entropy).expect("vector entropy is aligned");
            VectorCase {
                entropy_hex: to_hex(&entropy),
                mnemonic: m.as_str().to_owned(),
                seed_hex: seed::derive(m.as_str(), VECTOR_PASSPHRASE).to_hex(),
            }
        })
        .collect();

    let file = VectorFile {
        version: 1,
        description: "BIP-39 English vectors: entropy -> mnemonic -> seed (PBKDF2-HMAC-SHA-512, 2048 rounds)",
        passphrase: VECTOR_PASSPHRASE,
        cases,
    };
    serde_json::to_string_pretty(&file).expect("vector serialization cannot fail")
}
