// src/cipher/mod.rs
//! The cipher suite — one module per cipher, each a pure encode/decode pair
//!
//! Every transform maps `text × key → text` with no state between calls.
//! Decode is the structural inverse of encode, except XOR which is its
//! own inverse.

pub mod caesar;
pub mod substitution;
pub mod transposition;
pub mod vigenere;
pub mod xor;
