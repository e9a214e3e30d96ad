// src/cipher/xor.rs
//! XOR cipher — byte-wise XOR against a cyclically repeated key
//!
//! The operation is its own inverse, so encrypt and decrypt are the same
//! transform. Output bytes are arbitrary — in particular not guaranteed
//! to be printable or valid UTF-8 — and any text-safe encoding is the
//! caller's business.
//!
//! The one-time-pad names are kept as aliases for compatibility with the
//! suite's vocabulary: the key here is reused across the whole input, not
//! single-use, so this is NOT a true one-time pad and carries no secrecy
//! guarantee.

use crate::error::{CipherError, Result};

/// XOR each input byte with the key byte at `i % key.len()`.
pub fn encrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    Ok(data
        .iter()
        .zip(key.iter().cycle())
        .map(|(&b, &k)| b ^ k)
        .collect())
}

/// Self-inverse — decrypting is just encrypting again.
pub fn decrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    encrypt(data, key)
}

/// Alias for [`encrypt`] under the suite's one-time-pad name
pub fn one_time_pad_encrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    encrypt(data, key)
}

/// Alias for [`decrypt`] under the suite's one-time-pad name
pub fn one_time_pad_decrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    decrypt(data, key)
}
