//! Conformance Harness — BIP-39 Invariant Tests
//!
//! Enforces the MUST-level behaviours of the mnemonic core through the
//! public API only.
//!
//! Invariant coverage:
//! - Word count per strength, round-trip, known vectors (encoding)
//! - Checksum enforcement: every single-bit checksum flip is rejected
//! - Structural rejection: word count, unknown words
//! - Seed derivation: determinism, passphrase sensitivity, no validation
//! - Error display stability

mod checksum_enforcement;
mod encoding_vectors;
mod error_stability;
mod seed_derivation;
mod structural_rejection;
