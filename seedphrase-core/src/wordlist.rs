//! BIP-39 wordlists — bidirectional index ↔ word lookup.
//!
//! The default English list is embedded at compile time and built once
//! on first use. It is immutable after that; callers who need another
//! language construct their own [`Wordlist`] and pass it in explicitly
//! (see [`crate::config::SeedPhraseConfig`]).
//!
//! ## Invariants
//! Every `Wordlist` value holds exactly 2048 unique, non-empty,
//! lowercase, whitespace-free words in NFKD form, matching the
//! normalization applied to user input. Both lookup directions are O(1).

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use unicode_normalization::UnicodeNormalization;

use crate::constants::{WORDLIST_LENGTH, WORD_INDEX_MASK};
use crate::errors::SeedPhraseError;

const ENGLISH_TXT: &str = include_str!("../wordlists/english.txt");

static ENGLISH: OnceLock<Wordlist> = OnceLock::new();

/// An ordered table of 2048 unique words.
#[derive(Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
    index: HashMap<String, u16>,
}

impl Wordlist {
    /// The BIP-39 English wordlist.
    pub fn english() -> &'static Wordlist {
        ENGLISH.get_or_init(|| Self::build(ENGLISH_TXT.lines().map(str::to_owned).collect()))
    }

    /// Build a wordlist from an ordered sequence of words.
    ///
    /// Words are stored NFKD-normalized.
    ///
    /// # Errors
    /// Returns `SeedPhraseError::Wordlist` if the list does not hold
    /// exactly 2048 entries, or any entry is empty, contains uppercase
    /// characters or whitespace, or appears more than once.
    pub fn from_words<I, S>(words: I) -> Result<Self, SeedPhraseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| Into::<String>::into(w).nfkd().collect())
            .collect();
        if words.len() != WORDLIST_LENGTH {
            return Err(SeedPhraseError::Wordlist(format!(
                "expected {WORDLIST_LENGTH} words, got {}",
                words.len()
            )));
        }
        for (i, word) in words.iter().enumerate() {
            if word.is_empty() {
                return Err(SeedPhraseError::Wordlist(format!("empty word at index {i}")));
            }
            if word.chars().any(char::is_whitespace) {
                return Err(SeedPhraseError::Wordlist(format!(
                    "whitespace in word at index {i}"
                )));
            }
            if word
                .chars()
                .any(|c| c.is_uppercase() || c.to_lowercase().ne(std::iter::once(c)))
            {
                return Err(SeedPhraseError::Wordlist(format!(
                    "uppercase character in word at index {i}"
                )));
            }
        }

        let list = Self::build(words);
        if list.index.len() != WORDLIST_LENGTH {
            return Err(SeedPhraseError::Wordlist(format!(
                "expected {WORDLIST_LENGTH} unique words, got {}",
                list.index.len()
            )));
        }
        Ok(list)
    }

    /// Parse a wordlist file: one word per line, surrounding whitespace
    /// and blank lines ignored.
    ///
    /// # Errors
    /// Same as [`Wordlist::from_words`].
    pub fn parse(text: &str) -> Result<Self, SeedPhraseError> {
        Self::from_words(text.lines().map(str::trim).filter(|l| !l.is_empty()))
    }

    fn build(words: Vec<String>) -> Self {
        let index = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i as u16))
            .collect();
        Self { words, index }
    }

    /// Word at `index`. Only the low 11 bits of `index` are used.
    pub fn word(&self, index: u16) -> &str {
        &self.words[usize::from(index & WORD_INDEX_MASK)]
    }

    /// Position of `word` in the list, if present.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    /// Whether `word` is in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Always 2048.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wordlist")
            .field("len", &self.words.len())
            .field("first", &self.words.first())
            .finish()
    }
}
