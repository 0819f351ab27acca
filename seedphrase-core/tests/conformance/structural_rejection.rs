//! Conformance: Structural Rejection
//!
//! Invariants under test:
//! - Word count outside {12,15,18,21,24} → None / false
//! - Any word absent from the wordlist → None / false
//! - Rejection never panics, whatever the input

use seedphrase_core::errors::DecodeError;
use seedphrase_core::mnemonic::{decode, try_decode, validate};

const ZERO_16: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

#[test]
fn conformance_thirteen_words_rejected() {
    let thirteen = format!("abandon {ZERO_16}");
    assert_eq!(decode(&thirteen), None);
    assert!(!validate(&thirteen));
    assert_eq!(try_decode(&thirteen), Err(DecodeError::WordCount(13)));
}

#[test]
fn conformance_every_unsanctioned_word_count_rejected() {
    for count in 0..=30usize {
        if [12, 15, 18, 21, 24].contains(&count) {
            continue;
        }
        let phrase = vec!["abandon"; count].join(" ");
        assert_eq!(
            try_decode(&phrase),
            Err(DecodeError::WordCount(count)),
            "{count} words"
        );
    }
}

#[test]
fn conformance_unknown_word_rejected() {
    let phrase = ZERO_16.replace("about", "aboot");
    assert_eq!(decode(&phrase), None);
    assert!(!validate(&phrase));
    assert_eq!(
        try_decode(&phrase),
        Err(DecodeError::UnknownWord { position: 11 })
    );
}

#[test]
fn conformance_words_are_case_sensitive() {
    assert!(!validate(&ZERO_16.to_uppercase()));
}

#[test]
fn conformance_garbage_input_never_panics() {
    let inputs = [
        "",
        " ",
        "\u{0}",
        "\u{feff}abandon",
        "🦀 🦀 🦀 🦀 🦀 🦀 🦀 🦀 🦀 🦀 🦀 🦀",
        "abandon,abandon,abandon",
        "a\u{301}\u{301}\u{301}",
    ];
    for input in inputs {
        assert!(!validate(input), "{input:?}");
    }
}

#[test]
fn conformance_irregular_whitespace_accepted() {
    let messy = format!("\u{3000}{}\r\n", ZERO_16.replace(' ', " \t\u{a0}"));
    assert_eq!(decode(&messy), Some(vec![0u8; 16]));
}
