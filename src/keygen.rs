// src/keygen.rs
//! Random key generation for the keyed ciphers

use rand::seq::SliceRandom;

use crate::consts::{ALPHABET, MAX_TRANSPOSITION_COLUMNS};
use crate::error::{CipherError, Result};

/// Generate a random substitution key — a shuffled permutation of `A..=Z`
pub fn random_substitution_key() -> String {
    let mut letters = ALPHABET.to_vec();
    letters.shuffle(&mut rand::rng());
    letters.into_iter().map(char::from).collect()
}

/// Generate a random transposition key for `columns` columns — a shuffled
/// permutation of the digits `1..=columns`.
///
/// `columns` must be in `1..=9`; a single digit can only name nine
/// columns.
pub fn random_transposition_key(columns: usize) -> Result<String> {
    if columns == 0 {
        return Err(CipherError::EmptyKey);
    }
    if columns > MAX_TRANSPOSITION_COLUMNS {
        return Err(CipherError::InvalidTranspositionKey);
    }
    let mut digits: Vec<u8> = (1..=columns as u8).collect();
    digits.shuffle(&mut rand::rng());
    Ok(digits.into_iter().map(|d| char::from(b'0' + d)).collect())
}
