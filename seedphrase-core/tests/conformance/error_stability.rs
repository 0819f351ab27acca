//! Conformance: Error Display Stability
//!
//! Error strings reach CLI output and wasm exceptions; they MUST stay
//! stable and MUST NOT contain mnemonic words.

use seedphrase_core::errors::{DecodeError, SeedPhraseError};

#[test]
fn conformance_seedphrase_error_display_format_stable() {
    let cases: Vec<(SeedPhraseError, &str)> = vec![
        (
            SeedPhraseError::InvalidEntropyLength(15),
            "Entropy error: invalid entropy length 15 bytes",
        ),
        (
            SeedPhraseError::InvalidStrength(64),
            "Strength error: unsupported strength 64 bits",
        ),
        (
            SeedPhraseError::EntropySource("os rng unavailable".into()),
            "Entropy error: os rng unavailable",
        ),
        (
            SeedPhraseError::Wordlist("expected 2048 words, got 1".into()),
            "Wordlist error: expected 2048 words, got 1",
        ),
        (
            SeedPhraseError::Encoding("odd-length hex string".into()),
            "Encoding error: odd-length hex string",
        ),
    ];

    for (error, expected) in &cases {
        assert_eq!(error.to_string(), *expected, "SeedPhraseError display drift");
    }
}

#[test]
fn conformance_decode_error_carries_no_words() {
    let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon aboot";
    let err = seedphrase_core::mnemonic::try_decode(phrase).unwrap_err();
    assert!(!err.to_string().contains("aboot"));
    assert_eq!(err, DecodeError::UnknownWord { position: 11 });
}

#[test]
fn conformance_errors_are_std_error() {
    let _: &dyn std::error::Error = &SeedPhraseError::InvalidStrength(1);
    let _: &dyn std::error::Error = &DecodeError::Checksum;
}
