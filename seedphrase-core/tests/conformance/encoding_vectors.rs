//! Conformance: Encoding
//!
//! Invariants under test:
//! - generate(s) yields (s + s/32) / 11 words for every strength
//! - decode(encode(e)) == e
//! - validate(generate(s)) holds for every strength
//! - 16 zero bytes ↔ "abandon × 11 about"

use seedphrase_core::mnemonic::{decode, encode, generate, validate};
use seedphrase_core::strength::Strength;

const ZERO_16: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

#[test]
fn conformance_generate_word_count_per_strength() {
    let expected = [(128, 12), (160, 15), (192, 18), (224, 21), (256, 24)];
    for (bits, words) in expected {
        let strength = Strength::from_bits(bits).unwrap();
        let m = generate(strength).unwrap();
        assert_eq!(
            m.as_str().split(' ').count(),
            words,
            "wrong word count for {bits}-bit strength"
        );
    }
}

#[test]
fn conformance_generated_mnemonics_validate() {
    for strength in Strength::ALL {
        for _ in 0..8 {
            let m = generate(strength).unwrap();
            assert!(validate(m.as_str()), "generated {strength} mnemonic failed validation");
        }
    }
}

#[test]
fn conformance_round_trip_patterned_entropy() {
    for strength in Strength::ALL {
        for fill in [0x00u8, 0x01, 0x55, 0xaa, 0xfe, 0xff] {
            let entropy: Vec<u8> = (0..strength.entropy_len())
                .map(|i| fill.wrapping_add(i as u8))
                .collect();
            let m = encode(&entropy).unwrap();
            assert_eq!(decode(m.as_str()), Some(entropy));
        }
    }
}

#[test]
fn conformance_zero_entropy_vector() {
    assert_eq!(encode(&[0u8; 16]).unwrap().as_str(), ZERO_16);
    assert_eq!(decode(ZERO_16), Some(vec![0u8; 16]));
}

#[test]
fn conformance_generation_not_constant() {
    // Two 256-bit draws colliding is astronomically unlikely with a CSPRNG.
    let a = generate(Strength::Bits256).unwrap();
    let b = generate(Strength::Bits256).unwrap();
    assert_ne!(a, b);
}
