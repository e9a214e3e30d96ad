// src/cipher/substitution.rs
//! Simple substitution cipher — monoalphabetic lookup into a 26-letter key
//!
//! The key is a permutation of `A..=Z`; the letter at alphabet position
//! `i` encrypts to `key[i]`. Input is folded to uppercase before the
//! lookup and original case is NOT restored — output letters are always
//! uppercase. That lossy-case behavior is the contract, not a bug;
//! callers must not rely on case round-tripping.

use crate::alphabet;
use crate::consts::ALPHABET_LEN;
use crate::error::{CipherError, Result};

/// Substitute each letter with its counterpart in `key`.
///
/// Non-letter characters pass through unchanged. Returns
/// [`CipherError::InvalidSubstitutionKey`] unless `key` is a permutation
/// of the 26 uppercase letters.
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    let key = validate_key(key)?;
    Ok(text
        .chars()
        .map(|c| {
            let c = c.to_ascii_uppercase();
            match alphabet::letter_index(c) {
                Some(i) => key[usize::from(i)] as char,
                None => c,
            }
        })
        .collect())
}

/// Invert [`encrypt`]: look each letter up in `key` and emit the plain
/// alphabet letter at that position.
pub fn decrypt(text: &str, key: &str) -> Result<String> {
    let key = validate_key(key)?;
    Ok(text
        .chars()
        .map(|c| {
            let c = c.to_ascii_uppercase();
            match key.iter().position(|&k| k as char == c) {
                Some(i) => alphabet::letter_at(i as u8),
                None => c,
            }
        })
        .collect())
}

/// Key must be exactly the 26 uppercase letters, each appearing once
fn validate_key(key: &str) -> Result<&[u8]> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    let bytes = key.as_bytes();
    if bytes.len() != usize::from(ALPHABET_LEN) {
        return Err(CipherError::InvalidSubstitutionKey);
    }
    let mut seen = [false; 26];
    for &b in bytes {
        if !b.is_ascii_uppercase() || seen[usize::from(b - b'A')] {
            return Err(CipherError::InvalidSubstitutionKey);
        }
        seen[usize::from(b - b'A')] = true;
    }
    Ok(bytes)
}
