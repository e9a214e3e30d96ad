// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CipherError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("key must not be empty")]
    EmptyKey,

    #[error("Vigenère key must contain only letters")]
    KeyNotAlphabetic,

    #[error("substitution key must be a permutation of the 26 uppercase letters A-Z")]
    InvalidSubstitutionKey,

    #[error("transposition key must be a permutation of the digits 1..=N for N columns")]
    InvalidTranspositionKey,
}
