// src/cipher/caesar.rs
//! Caesar cipher — fixed-shift rotation within each case range
//!
//! Uppercase and lowercase letters rotate independently; every other
//! character passes through unchanged, so case and punctuation survive a
//! round trip. ROT13 is the shift-13 special case and its own inverse.

use crate::alphabet;
use crate::consts::{ALPHABET_LEN, ROT13_SHIFT};

/// Shift every Latin letter forward by `shift` positions (mod 26).
///
/// Any `i32` shift is accepted; it is normalized into `[0, 26)` first, so
/// negative shifts and shifts ≥ 26 behave as their reduced equivalent.
pub fn encrypt(text: &str, shift: i32) -> String {
    let shift = shift.rem_euclid(i32::from(ALPHABET_LEN)) as u8;
    text.chars().map(|c| alphabet::rotate(c, shift)).collect()
}

/// Shift every Latin letter backward by `shift` positions (mod 26).
pub fn decrypt(text: &str, shift: i32) -> String {
    let shift = shift.rem_euclid(i32::from(ALPHABET_LEN));
    encrypt(text, i32::from(ALPHABET_LEN) - shift)
}

/// ROT13 — Caesar with shift 13
pub fn rot13_encrypt(text: &str) -> String {
    encrypt(text, ROT13_SHIFT)
}

/// ROT13 decode — identical to encoding, applied for symmetry with the
/// other cipher pairs
pub fn rot13_decrypt(text: &str) -> String {
    decrypt(text, ROT13_SHIFT)
}
