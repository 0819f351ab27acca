//! Hash and key-derivation primitives — SHA-256 and PBKDF2-HMAC-SHA-512.
//!
//! Thin synchronous wrappers over `sha2` and `pbkdf2`. The rest of the
//! crate never touches those crates directly.

use pbkdf2::pbkdf2_hmac;
use sha2::{Digest, Sha256, Sha512};

use crate::constants::SEED_LENGTH;

/// Compute SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// PBKDF2 with HMAC-SHA-512, producing [`SEED_LENGTH`] bytes.
pub fn pbkdf2_sha512(password: &[u8], salt: &[u8], rounds: u32) -> [u8; SEED_LENGTH] {
    let mut out = [0u8; SEED_LENGTH];
    pbkdf2_hmac::<Sha512>(password, salt, rounds, &mut out);
    out
}
