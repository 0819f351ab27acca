//! Seed derivation — mnemonic + passphrase → 64-byte seed.
//!
//! ```text
//! password = NFKD(mnemonic) with words joined by single spaces
//! salt     = UTF-8("mnemonic" + passphrase)
//! seed     = PBKDF2-HMAC-SHA-512(password, salt, 2048 rounds, 64 bytes)
//! ```
//!
//! Derivation does not verify the checksum or even the words: any text
//! yields a seed. Callers that want to reject invalid phrases validate
//! first with [`crate::mnemonic::validate`].

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::constants::{PBKDF2_ROUNDS, SALT_PREFIX, SEED_LENGTH};
use crate::encoding::to_hex;
use crate::hash::pbkdf2_sha512;
use crate::normalize;

/// 64-byte BIP-39 seed. Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LENGTH]);

impl Seed {
    /// The raw seed bytes.
    pub fn as_bytes(&self) -> &[u8; SEED_LENGTH] {
        &self.0
    }

    /// Lowercase hex of the seed bytes.
    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

/// Derive the seed for `mnemonic` under `passphrase` (`""` for none).
///
/// The passphrase is used exactly as given; only the mnemonic is
/// normalized.
pub fn derive(mnemonic: &str, passphrase: &str) -> Seed {
    let password = normalize::canonical_phrase(mnemonic);
    let salt = Zeroizing::new(format!("{SALT_PREFIX}{passphrase}"));
    Seed(pbkdf2_sha512(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
    ))
}
