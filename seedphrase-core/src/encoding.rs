//! Hex encoding for entropy and seeds.
//!
//! Used by the CLI, the wasm bindings and the golden vector files, all of
//! which exchange entropy and seeds as lowercase hex.

use crate::errors::SeedPhraseError;

/// Encode bytes to lowercase hex string.
pub fn to_hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decode hex string to bytes. Accepts upper- and lowercase digits.
///
/// # Errors
/// Returns `SeedPhraseError::Encoding` on invalid hex input.
pub fn from_hex(encoded: &str) -> Result<Vec<u8>, SeedPhraseError> {
    if encoded.len() % 2 != 0 {
        return Err(SeedPhraseError::Encoding("odd-length hex string".into()));
    }
    if !encoded.is_ascii() {
        return Err(SeedPhraseError::Encoding("non-ascii hex string".into()));
    }
    (0..encoded.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&encoded[i..i + 2], 16)
                .map_err(|e| SeedPhraseError::Encoding(format!("invalid hex: {e}")))
        })
        .collect()
}
