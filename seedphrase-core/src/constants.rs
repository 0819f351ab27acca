//! BIP-39 constants.
//!
//! Every constant here is fixed by BIP-39 and shared with every other
//! conforming implementation. Changing any of them produces mnemonics
//! and seeds that no other wallet can reproduce.

/// Number of entries in a BIP-39 wordlist.
pub const WORDLIST_LENGTH: usize = 2048;

/// Bits encoded by a single word (`2^11 == WORDLIST_LENGTH`).
pub const BITS_PER_WORD: usize = 11;

/// Mask applied to an 11-bit group before the wordlist lookup.
///
/// Groups are exactly 11 bits wide so the mask never changes a value.
pub const WORD_INDEX_MASK: u16 = (1 << BITS_PER_WORD) - 1;

/// Entropy bits per checksum bit.
pub const ENTROPY_BITS_PER_CHECKSUM_BIT: usize = 32;

/// Sanctioned entropy sizes in bits.
pub const ENTROPY_BITS: [usize; 5] = [128, 160, 192, 224, 256];

/// Sanctioned mnemonic lengths in words, index-aligned with [`ENTROPY_BITS`].
pub const WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Seed length in bytes (512 bits of PBKDF2 output).
pub const SEED_LENGTH: usize = 64;

/// PBKDF2-HMAC-SHA-512 iteration count.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Literal prepended to the passphrase to form the PBKDF2 salt.
pub const SALT_PREFIX: &str = "mnemonic";
