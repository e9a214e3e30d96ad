// src/consts.rs
//! Shared constants — alphabet and checksum parameters

/// The plain alphabet every shift cipher indexes into
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of letters in the Latin alphabet
pub const ALPHABET_LEN: u8 = 26;

/// Fixed Caesar shift that makes ROT13 its own inverse
pub const ROT13_SHIFT: i32 = 13;

/// Largest column count a single-digit transposition key can express
pub const MAX_TRANSPOSITION_COLUMNS: usize = 9;

/// Adler-32 modulus — largest prime below 2^16
pub const MOD_ADLER: u32 = 65_521;

/// CRC-32 (IEEE 802.3) reflected polynomial
pub const CRC32_POLY: u32 = 0xEDB8_8320;

/// FNV-1a 32-bit offset basis
pub const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;

/// FNV-1a 32-bit prime
pub const FNV_PRIME: u32 = 16_777_619;
