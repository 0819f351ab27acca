//! WASM bindings for seedphrase-core.
//!
//! Exposes generate / encode / decode / validate / derive to JavaScript.
//! Invalid user phrases come back as `undefined` / `false`; programmer
//! errors (bad strength, unaligned entropy) throw.

use seedphrase_core::mnemonic;
use seedphrase_core::seed;
use seedphrase_core::strength::Strength;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Generate a fresh English mnemonic. `strength_bits` ∈ {128,160,192,224,256}.
#[wasm_bindgen]
pub fn generate(strength_bits: u32) -> Result<String, JsError> {
    let strength = Strength::from_bits(strength_bits)?;
    Ok(mnemonic::generate(strength)?.to_string())
}

/// Encode 16/20/24/28/32 bytes of entropy as an English mnemonic.
#[wasm_bindgen]
pub fn encode(entropy: &[u8]) -> Result<String, JsError> {
    Ok(mnemonic::encode(entropy)?.to_string())
}

/// Entropy bytes, or `undefined` if the phrase is invalid.
#[wasm_bindgen]
pub fn decode(phrase: &str) -> Option<Vec<u8>> {
    mnemonic::decode(phrase)
}

/// `true` only for a phrase that decodes with a matching checksum.
#[wasm_bindgen]
pub fn validate(phrase: &str) -> bool {
    mnemonic::validate(phrase)
}

/// 64-byte seed. `passphrase` defaults to `""`.
#[wasm_bindgen]
pub fn derive(phrase: &str, passphrase: Option<String>) -> Vec<u8> {
    seed::derive(phrase, passphrase.as_deref().unwrap_or_default())
        .as_bytes()
        .to_vec()
}

/// Crate version of the bindings.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
