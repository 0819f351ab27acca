//! Entropy strength — the five sanctioned entropy sizes.

use std::fmt;

use crate::constants::{BITS_PER_WORD, ENTROPY_BITS_PER_CHECKSUM_BIT};
use crate::errors::SeedPhraseError;

/// Entropy size. Each variant fixes checksum width and word count.
///
/// | Strength | Entropy bytes | Checksum bits | Words |
/// |----------|---------------|---------------|-------|
/// | 128      | 16            | 4             | 12    |
/// | 160      | 20            | 5             | 15    |
/// | 192      | 24            | 6             | 18    |
/// | 224      | 28            | 7             | 21    |
/// | 256      | 32            | 8             | 24    |
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strength {
    Bits128,
    Bits160,
    Bits192,
    Bits224,
    #[default]
    Bits256,
}

impl Strength {
    /// All strengths, weakest first.
    pub const ALL: [Strength; 5] = [
        Strength::Bits128,
        Strength::Bits160,
        Strength::Bits192,
        Strength::Bits224,
        Strength::Bits256,
    ];

    /// Entropy size in bits.
    pub const fn bits(self) -> usize {
        match self {
            Strength::Bits128 => 128,
            Strength::Bits160 => 160,
            Strength::Bits192 => 192,
            Strength::Bits224 => 224,
            Strength::Bits256 => 256,
        }
    }

    /// Entropy size in bytes.
    pub const fn entropy_len(self) -> usize {
        self.bits() / 8
    }

    /// Checksum width in bits (`bits / 32`).
    pub const fn checksum_bits(self) -> usize {
        self.bits() / ENTROPY_BITS_PER_CHECKSUM_BIT
    }

    /// Entropy plus checksum, in bits. Always a multiple of 11.
    pub const fn total_bits(self) -> usize {
        self.bits() + self.checksum_bits()
    }

    /// Mnemonic length in words.
    pub const fn word_count(self) -> usize {
        self.total_bits() / BITS_PER_WORD
    }

    /// # Errors
    /// Returns `SeedPhraseError::InvalidStrength` for any other value.
    pub fn from_bits(bits: u32) -> Result<Self, SeedPhraseError> {
        Self::ALL
            .into_iter()
            .find(|s| s.bits() as u32 == bits)
            .ok_or(SeedPhraseError::InvalidStrength(bits))
    }

    /// # Errors
    /// Returns `SeedPhraseError::InvalidEntropyLength` for any length
    /// other than 16, 20, 24, 28, 32 bytes.
    pub fn from_entropy_len(len: usize) -> Result<Self, SeedPhraseError> {
        Self::ALL
            .into_iter()
            .find(|s| s.entropy_len() == len)
            .ok_or(SeedPhraseError::InvalidEntropyLength(len))
    }

    /// Strength producing `count` words, if any.
    pub fn from_word_count(count: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.word_count() == count)
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.bits())
    }
}

impl TryFrom<u32> for Strength {
    type Error = SeedPhraseError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}
