// src/alphabet.rs
//! Letter classification and in-case rotation shared by the shift ciphers
//!
//! Keep this light — every cipher works in terms of these two primitives
//! plus plain `char` methods.

use crate::consts::{ALPHABET, ALPHABET_LEN};

/// Position of an uppercase letter in `A..=Z`, or `None` for anything else
pub fn letter_index(c: char) -> Option<u8> {
    if c.is_ascii_uppercase() {
        Some(c as u8 - b'A')
    } else {
        None
    }
}

/// Letter at the given alphabet position (caller guarantees `index < 26`)
pub fn letter_at(index: u8) -> char {
    ALPHABET[usize::from(index % ALPHABET_LEN)] as char
}

/// Rotate a Latin letter forward within its own case range.
///
/// Uppercase rotates through `A..=Z`, lowercase through `a..=z`, and any
/// other character is returned unchanged.
pub fn rotate(c: char, shift: u8) -> char {
    let shift = shift % ALPHABET_LEN;
    if c.is_ascii_uppercase() {
        (b'A' + (c as u8 - b'A' + shift) % ALPHABET_LEN) as char
    } else if c.is_ascii_lowercase() {
        (b'a' + (c as u8 - b'a' + shift) % ALPHABET_LEN) as char
    } else {
        c
    }
}
