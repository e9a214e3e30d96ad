// src/hashing/checksum.rs
//! Non-cryptographic checksums — Adler-32, CRC-32 and FNV-1a

use crate::consts::{CRC32_POLY, FNV_OFFSET_BASIS, FNV_PRIME, MOD_ADLER};

/// Adler-32 checksum (RFC 1950). Empty input yields 1.
pub fn adler32(data: &[u8]) -> u32 {
    let mut a: u32 = 1;
    let mut b: u32 = 0;
    for &byte in data {
        a = (a + u32::from(byte)) % MOD_ADLER;
        b = (b + a) % MOD_ADLER;
    }
    (b << 16) | a
}

/// CRC-32 (IEEE 802.3, reflected). Empty input yields 0.
pub fn crc32(data: &[u8]) -> u32 {
    let mut crc = u32::MAX;
    for &byte in data {
        crc ^= u32::from(byte);
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (CRC32_POLY & mask);
        }
    }
    !crc
}

/// FNV-1a 32-bit hash. Empty input yields the offset basis.
pub fn fnv1a(data: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in data {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
