// src/cipher/vigenere.rs
//! Vigenère cipher — polyalphabetic shift keyed by a repeating keyword
//!
//! The keyword is case-insensitive and cycled over the full length of the
//! text. Every character position consumes one key position, including
//! characters that are not letters and therefore are not shifted — the
//! key cycle never pauses. Output letters are always uppercase (same
//! lossy-case contract as the substitution cipher).

use crate::alphabet;
use crate::consts::ALPHABET_LEN;
use crate::error::{CipherError, Result};

/// Shift each letter forward by its paired key letter's alphabet position.
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    transform(text, key, |c, k| (c + k) % ALPHABET_LEN)
}

/// Shift each letter backward by its paired key letter's alphabet position.
pub fn decrypt(text: &str, key: &str) -> Result<String> {
    transform(text, key, |c, k| (c + ALPHABET_LEN - k) % ALPHABET_LEN)
}

fn transform(text: &str, key: &str, shift: impl Fn(u8, u8) -> u8) -> Result<String> {
    let shifts = key_shifts(key)?;
    Ok(text
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let c = c.to_ascii_uppercase();
            // The key index advances on every position, letter or not.
            let k = shifts[i % shifts.len()];
            match alphabet::letter_index(c) {
                Some(ci) => alphabet::letter_at(shift(ci, k)),
                None => c,
            }
        })
        .collect())
}

/// Per-letter shift amounts: the key letter's position in `A..=Z`
fn key_shifts(key: &str) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    key.chars()
        .map(|c| {
            alphabet::letter_index(c.to_ascii_uppercase()).ok_or(CipherError::KeyNotAlphabetic)
        })
        .collect()
}
