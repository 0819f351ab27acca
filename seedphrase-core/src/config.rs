//! Runtime configuration — which wordlist and default strength to use.
//!
//! The wordlist is injected here rather than read from a mutable global.
//! `SeedPhraseConfig::default()` borrows the immutable English list.

use std::fmt;

use crate::errors::{DecodeError, SeedPhraseError};
use crate::mnemonic::{self, Mnemonic};
use crate::seed::{self, Seed};
use crate::strength::Strength;
use crate::wordlist::Wordlist;

/// Wordlist + default strength, shared by all operations.
#[derive(Clone, Copy)]
pub struct SeedPhraseConfig<'w> {
    wordlist: &'w Wordlist,
    strength: Strength,
}

impl Default for SeedPhraseConfig<'static> {
    fn default() -> Self {
        Self::new(Wordlist::english())
    }
}

impl<'w> SeedPhraseConfig<'w> {
    /// Config over `wordlist` with the default 256-bit strength.
    pub fn new(wordlist: &'w Wordlist) -> Self {
        Self {
            wordlist,
            strength: Strength::default(),
        }
    }

    /// Same strength over a different wordlist.
    pub fn with_wordlist<'v>(self, wordlist: &'v Wordlist) -> SeedPhraseConfig<'v> {
        SeedPhraseConfig {
            wordlist,
            strength: self.strength,
        }
    }

    /// Same wordlist, generating at `strength`.
    pub fn with_strength(self, strength: Strength) -> Self {
        Self { strength, ..self }
    }

    /// The injected wordlist.
    pub fn wordlist(&self) -> &'w Wordlist {
        self.wordlist
    }

    /// Strength used by [`SeedPhraseConfig::generate`].
    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// Generate a mnemonic at the configured strength from OS randomness.
    ///
    /// # Errors
    /// Returns `SeedPhraseError::EntropySource` if the OS CSPRNG fails.
    pub fn generate(&self) -> Result<Mnemonic, SeedPhraseError> {
        mnemonic::generate_with(self.strength, &mut rand_core::OsRng, self.wordlist)
    }

    /// # Errors
    /// Returns `SeedPhraseError::InvalidEntropyLength` for unaligned entropy.
    pub fn encode(&self, entropy: &[u8]) -> Result<Mnemonic, SeedPhraseError> {
        mnemonic::encode_with(entropy, self.wordlist)
    }

    /// Entropy for `phrase`, or `None` if it is not a valid mnemonic over
    /// this wordlist.
    pub fn decode(&self, phrase: &str) -> Option<Vec<u8>> {
        mnemonic::decode_with(phrase, self.wordlist)
    }

    /// # Errors
    /// See [`DecodeError`].
    pub fn try_decode(&self, phrase: &str) -> Result<Vec<u8>, DecodeError> {
        mnemonic::try_decode_with(phrase, self.wordlist)
    }

    /// # Errors
    /// See [`DecodeError`].
    pub fn parse(&self, phrase: &str) -> Result<Mnemonic, DecodeError> {
        Mnemonic::parse_in(self.wordlist, phrase)
    }

    /// Whether `phrase` decodes over this wordlist, checksum included.
    pub fn validate(&self, phrase: &str) -> bool {
        mnemonic::validate_with(phrase, self.wordlist)
    }

    /// Seed derivation does not depend on the wordlist; provided so
    /// callers holding a config need nothing else.
    pub fn derive(&self, phrase: &str, passphrase: &str) -> Seed {
        seed::derive(phrase, passphrase)
    }
}

impl fmt::Debug for SeedPhraseConfig<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedPhraseConfig")
            .field("wordlist_first", &self.wordlist.word(0))
            .field("strength", &self.strength)
            .finish()
    }
}
