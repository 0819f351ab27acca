//! Conformance: Checksum Enforcement
//!
//! Invariants under test:
//! - Flipping any single checksum bit makes decode return None
//! - validate rejects the same phrases (no structural-only fast path)
//!
//! The bit flip is applied to the last word's index: the checksum
//! occupies its low `bits / 32` bits for every strength.

use seedphrase_core::errors::DecodeError;
use seedphrase_core::mnemonic::{decode, encode, try_decode, validate};
use seedphrase_core::strength::Strength;
use seedphrase_core::wordlist::Wordlist;

fn flip_last_word_bit(phrase: &str, bit: usize) -> String {
    let english = Wordlist::english();
    let mut words: Vec<&str> = phrase.split(' ').collect();
    let last = words.len() - 1;
    let index = english.index_of(words[last]).unwrap();
    words[last] = english.word(index ^ (1 << bit));
    words.join(" ")
}

#[test]
fn conformance_every_checksum_bit_flip_rejected() {
    for strength in Strength::ALL {
        let entropy: Vec<u8> = (0..strength.entropy_len()).map(|i| (i * 37) as u8).collect();
        let valid = encode(&entropy).unwrap();
        assert!(validate(valid.as_str()));

        for bit in 0..strength.checksum_bits() {
            let tampered = flip_last_word_bit(valid.as_str(), bit);
            assert_eq!(
                decode(&tampered),
                None,
                "{strength}: checksum bit {bit} flip accepted"
            );
            assert!(!validate(&tampered), "{strength}: validate skipped checksum");
            assert_eq!(try_decode(&tampered), Err(DecodeError::Checksum));
        }
    }
}

#[test]
fn conformance_entropy_bit_flip_rejected_by_checksum() {
    // Flipping an entropy bit changes SHA-256; with a 4-bit checksum a
    // 1/16 collision is possible, so test a fixed input known to differ.
    let valid = encode(&[0u8; 16]).unwrap();
    let mut words: Vec<&str> = valid.as_str().split(' ').collect();
    words[0] = "ability"; // index 1: flips the lowest bit of word 0
    let tampered = words.join(" ");
    assert_eq!(try_decode(&tampered), Err(DecodeError::Checksum));
}

#[test]
fn conformance_validate_equals_decode_is_some() {
    let phrases = [
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo",
        "",
    ];
    for phrase in phrases {
        assert_eq!(validate(phrase), decode(phrase).is_some(), "{phrase:?}");
    }
}
