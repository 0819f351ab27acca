//! Mnemonic text normalization.
//!
//! Decoding and seed derivation both start here: trim, NFKD, split on
//! runs of separator characters. Outputs are wrapped in `Zeroizing` since
//! the text is the secret.
//!
//! ## Separators
//! The separator set is the ECMAScript `\s` class, so phrases split the
//! same way they do in browser wallets. It differs from
//! `char::is_whitespace` in two places: U+FEFF (BOM) separates, U+0085
//! (NEL) does not.

use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

/// Whether `c` separates mnemonic words.
pub fn is_separator(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{feff}' => true,
        _ => c.is_whitespace(),
    }
}

/// Trimmed NFKD form of `phrase`. Separators inside are left as-is.
pub fn nfkd(phrase: &str) -> Zeroizing<String> {
    Zeroizing::new(phrase.trim_matches(is_separator).nfkd().collect())
}

/// Words of an already normalized phrase.
pub fn words(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(is_separator).filter(|w| !w.is_empty())
}

/// Canonical phrase: NFKD words joined by single ASCII spaces.
///
/// This is the exact PBKDF2 password input for seed derivation.
pub fn canonical_phrase(phrase: &str) -> Zeroizing<String> {
    let normalized = nfkd(phrase);
    let mut out = Zeroizing::new(String::with_capacity(normalized.len()));
    for (i, word) in words(&normalized).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
