//! Error types for seedphrase-core.
//!
//! Two classes, kept apart on purpose:
//! - [`SeedPhraseError`] — programmer or environment errors from
//!   generate/encode and wordlist construction. Returned as `Err`.
//! - [`DecodeError`] — the reasons a user-supplied phrase is rejected.
//!   Only [`crate::mnemonic::try_decode`] and
//!   [`crate::mnemonic::Mnemonic::parse_in`] surface it; `decode` and
//!   `validate` collapse it to `None` / `false`.

/// Unified error type for hard failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedPhraseError {
    /// Entropy byte length is not one of 16, 20, 24, 28, 32.
    #[error("Entropy error: invalid entropy length {0} bytes")]
    InvalidEntropyLength(usize),

    /// Strength is not one of 128, 160, 192, 224, 256 bits.
    #[error("Strength error: unsupported strength {0} bits")]
    InvalidStrength(u32),

    /// The random byte source refused to produce entropy.
    #[error("Entropy error: {0}")]
    EntropySource(String),

    /// Wordlist failed the 2048-entry / unique / lowercase invariant.
    #[error("Wordlist error: {0}")]
    Wordlist(String),

    /// Encoding error (hex).
    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Why a mnemonic phrase was rejected.
///
/// Never carries the words themselves: phrases are secrets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Word count is not 12, 15, 18, 21 or 24.
    #[error("invalid word count {0}")]
    WordCount(usize),

    /// Word at `position` (zero-based) is not in the wordlist.
    #[error("unknown word at position {position}")]
    UnknownWord {
        /// Zero-based index of the offending word.
        position: usize,
    },

    /// Embedded checksum does not match SHA-256 of the entropy.
    #[error("checksum mismatch")]
    Checksum,
}
