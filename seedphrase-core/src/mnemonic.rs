//! Mnemonic encoding, decoding and validation.
//!
//! ## Algorithm
//! ```text
//! checksum = first (ENT / 32) bits of SHA-256(entropy)
//! bits     = entropy || checksum          (ENT + ENT/32 bits, multiple of 11)
//! word[i]  = wordlist[bits[11i .. 11i + 11]]
//! ```
//!
//! Decoding reverses the mapping, splits the bit string at
//! `floor(len * 32 / 33)` and recomputes the checksum. Validation is a
//! full decode: a phrase that passes the word-count and wordlist checks
//! but carries a wrong checksum is rejected.
//!
//! Every `*_with` function takes an explicit wordlist; the plain
//! variants use [`Wordlist::english`].

use std::fmt;
use std::str::FromStr;

use rand_core::{CryptoRng, OsRng, RngCore};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::constants::{BITS_PER_WORD, ENTROPY_BITS_PER_CHECKSUM_BIT};
use crate::errors::{DecodeError, SeedPhraseError};
use crate::hash::sha256;
use crate::normalize;
use crate::seed::{self, Seed};
use crate::strength::Strength;
use crate::wordlist::Wordlist;

/// A checksummed mnemonic phrase: words joined by single spaces.
///
/// Only produced by encoding entropy or by a successful checksum-verified
/// parse, so every value decodes back to its entropy under the wordlist
/// it was built with. The phrase is wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic {
    phrase: String,
    #[zeroize(skip)]
    strength: Strength,
}

impl Mnemonic {
    /// Parse and checksum-verify `phrase` against `wordlist`.
    ///
    /// Whitespace is normalized, so the stored phrase may differ from the
    /// input in spacing only.
    ///
    /// # Errors
    /// Returns the [`DecodeError`] describing why the phrase was rejected.
    pub fn parse_in(wordlist: &Wordlist, phrase: &str) -> Result<Self, DecodeError> {
        let (entropy, strength) = decode_inner(phrase, wordlist)?;
        drop(Zeroizing::new(entropy));
        Ok(Self {
            phrase: normalize::canonical_phrase(phrase).as_str().to_owned(),
            strength,
        })
    }

    /// The phrase, words separated by single spaces.
    pub fn as_str(&self) -> &str {
        &self.phrase
    }

    /// Words in order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.phrase.split(' ')
    }

    /// 12, 15, 18, 21 or 24.
    pub fn word_count(&self) -> usize {
        self.strength.word_count()
    }

    /// Entropy size this phrase encodes.
    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// Derive the 64-byte seed. See [`seed::derive`].
    pub fn to_seed(&self, passphrase: &str) -> Seed {
        seed::derive(&self.phrase, passphrase)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase)
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mnemonic({} words)", self.word_count())
    }
}

impl FromStr for Mnemonic {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_in(Wordlist::english(), s)
    }
}

impl AsRef<str> for Mnemonic {
    fn as_ref(&self) -> &str {
        &self.phrase
    }
}

// ── Encoder ─────────────────────────────────────────────────────────

/// Generate a fresh English mnemonic from OS randomness.
///
/// # Errors
/// Returns `SeedPhraseError::EntropySource` if the OS CSPRNG fails.
pub fn generate(strength: Strength) -> Result<Mnemonic, SeedPhraseError> {
    generate_with(strength, &mut OsRng, Wordlist::english())
}

/// Generate a mnemonic drawing `strength.entropy_len()` bytes from `rng`.
///
/// # Errors
/// Returns `SeedPhraseError::EntropySource` if `rng` fails.
pub fn generate_with<R>(
    strength: Strength,
    rng: &mut R,
    wordlist: &Wordlist,
) -> Result<Mnemonic, SeedPhraseError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    debug!(bits = strength.bits(), "generating mnemonic");
    let mut entropy = Zeroizing::new(vec![0u8; strength.entropy_len()]);
    rng.try_fill_bytes(&mut entropy)
        .map_err(|e| SeedPhraseError::EntropySource(e.to_string()))?;
    Ok(encode_entropy(&entropy, strength, wordlist))
}

/// Encode entropy as an English mnemonic.
///
/// # Errors
/// Returns `SeedPhraseError::InvalidEntropyLength` unless `entropy` is
/// 16, 20, 24, 28 or 32 bytes.
pub fn encode(entropy: &[u8]) -> Result<Mnemonic, SeedPhraseError> {
    encode_with(entropy, Wordlist::english())
}

/// Encode entropy as a mnemonic over `wordlist`.
///
/// # Errors
/// Returns `SeedPhraseError::InvalidEntropyLength` unless `entropy` is
/// 16, 20, 24, 28 or 32 bytes.
pub fn encode_with(entropy: &[u8], wordlist: &Wordlist) -> Result<Mnemonic, SeedPhraseError> {
    let strength = Strength::from_entropy_len(entropy.len())?;
    Ok(encode_entropy(entropy, strength, wordlist))
}

fn encode_entropy(entropy: &[u8], strength: Strength, wordlist: &Wordlist) -> Mnemonic {
    let digest = sha256(entropy);
    let entropy_bits = strength.bits();
    let bit = |i: usize| {
        if i < entropy_bits {
            bit_at(entropy, i)
        } else {
            bit_at(&digest, i - entropy_bits)
        }
    };

    let mut phrase = String::with_capacity(strength.word_count() * 9);
    for group in 0..strength.word_count() {
        let index = (0..BITS_PER_WORD).fold(0u16, |acc, offset| {
            (acc << 1) | u16::from(bit(group * BITS_PER_WORD + offset))
        });
        if group > 0 {
            phrase.push(' ');
        }
        phrase.push_str(wordlist.word(index));
    }

    Mnemonic { phrase, strength }
}

/// Bit `i` of `bytes`, most significant bit first.
fn bit_at(bytes: &[u8], i: usize) -> bool {
    bytes[i / 8] & (0x80 >> (i % 8)) != 0
}

// ── Decoder ─────────────────────────────────────────────────────────

/// Recover entropy from an English mnemonic, verifying its checksum.
///
/// Returns `None` for any invalid phrase; never panics.
pub fn decode(phrase: &str) -> Option<Vec<u8>> {
    decode_with(phrase, Wordlist::english())
}

/// Recover entropy from a mnemonic over `wordlist`.
pub fn decode_with(phrase: &str, wordlist: &Wordlist) -> Option<Vec<u8>> {
    try_decode_with(phrase, wordlist).ok()
}

/// Like [`decode`], but reports why the phrase was rejected.
///
/// # Errors
/// See [`DecodeError`].
pub fn try_decode(phrase: &str) -> Result<Vec<u8>, DecodeError> {
    try_decode_with(phrase, Wordlist::english())
}

/// Like [`decode_with`], but reports why the phrase was rejected.
///
/// # Errors
/// See [`DecodeError`].
pub fn try_decode_with(phrase: &str, wordlist: &Wordlist) -> Result<Vec<u8>, DecodeError> {
    decode_inner(phrase, wordlist).map(|(entropy, _)| entropy)
}

fn decode_inner(phrase: &str, wordlist: &Wordlist) -> Result<(Vec<u8>, Strength), DecodeError> {
    let result = decode_words(phrase, wordlist);
    if let Err(reason) = &result {
        debug!(%reason, "mnemonic rejected");
    }
    result
}

fn decode_words(phrase: &str, wordlist: &Wordlist) -> Result<(Vec<u8>, Strength), DecodeError> {
    let normalized = normalize::nfkd(phrase);
    let words: Vec<&str> = normalize::words(&normalized).collect();

    let strength =
        Strength::from_word_count(words.len()).ok_or(DecodeError::WordCount(words.len()))?;

    let indices = Zeroizing::new(
        words
            .iter()
            .enumerate()
            .map(|(position, word)| {
                wordlist
                    .index_of(word)
                    .ok_or(DecodeError::UnknownWord { position })
            })
            .collect::<Result<Vec<u16>, _>>()?,
    );

    let total_bits = indices.len() * BITS_PER_WORD;
    let entropy_bits =
        total_bits * ENTROPY_BITS_PER_CHECKSUM_BIT / (ENTROPY_BITS_PER_CHECKSUM_BIT + 1);
    let checksum_bits = total_bits - entropy_bits;
    debug_assert_eq!(entropy_bits, strength.bits());
    debug_assert_eq!(entropy_bits % 8, 0);

    let mut entropy = vec![0u8; entropy_bits / 8];
    let mut claimed = 0u8;
    for i in 0..total_bits {
        let index = indices[i / BITS_PER_WORD];
        let set = index & (1 << (BITS_PER_WORD - 1 - i % BITS_PER_WORD)) != 0;
        if i < entropy_bits {
            if set {
                entropy[i / 8] |= 0x80 >> (i % 8);
            }
        } else {
            claimed = (claimed << 1) | u8::from(set);
        }
    }

    let expected = sha256(&entropy)[0] >> (8 - checksum_bits);
    if claimed != expected {
        entropy.zeroize();
        return Err(DecodeError::Checksum);
    }

    Ok((entropy, strength))
}

// ── Validator ───────────────────────────────────────────────────────

/// Whether `phrase` is a valid English mnemonic, checksum included.
pub fn validate(phrase: &str) -> bool {
    validate_with(phrase, Wordlist::english())
}

/// Whether `phrase` is a valid mnemonic over `wordlist`, checksum included.
pub fn validate_with(phrase: &str, wordlist: &Wordlist) -> bool {
    decode_with(phrase, wordlist).is_some()
}
