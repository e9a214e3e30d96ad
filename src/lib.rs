// src/lib.rs
//! classical-ciphers — textbook cipher and digest toolkit
//!
//! Features:
//! - Classical cipher pairs: Caesar/ROT13, simple substitution,
//!   Vigenère, columnar transposition, XOR (one-time-pad alias)
//! - Random key generation for the keyed ciphers
//! - Companion hashing suite: SHA-1/256/512, MD5, BLAKE3, HMAC
//!   variants, Adler-32/CRC-32/FNV-1a checksums
//!
//! Every transform is a pure, synchronous function: `text × key → text`,
//! with `decrypt(encrypt(t, k), k) == t` for each cipher pair. Nothing is
//! cached or shared between calls, so any call is safe to run from any
//! thread.
//!
//! These are pedagogical algorithms. None of the ciphers is secure
//! against a modern adversary; the hashing suite wraps real digest
//! implementations but the suite as a whole makes no security claims.

pub mod alphabet;
pub mod cipher;
pub mod consts;
pub mod error;
pub mod hashing;
pub mod keygen;

// Re-export everything users need at the crate root
pub use cipher::{caesar, substitution, transposition, vigenere, xor};
pub use error::{CipherError, Result};
pub use hashing::HashAlgorithm;
pub use keygen::{random_substitution_key, random_transposition_key};
