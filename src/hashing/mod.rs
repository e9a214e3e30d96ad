// src/hashing/mod.rs
//! Hashing suite — digests, HMACs and rolling checksums
//!
//! Packaged alongside the ciphers but independent of them: nothing in
//! `cipher` calls into this module. Digest and HMAC output is lowercase
//! hex; checksums return their customary `u32`.

mod checksum;
mod digest;

pub use checksum::{adler32, crc32, fnv1a};
pub use digest::{
    blake3_hex, hash_hex, hmac_hex, md5_hex, sha1_hex, sha256_hex, sha512_hex,
};

/// Digest algorithms selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum HashAlgorithm {
    Sha1,
    #[default]
    Sha256,
    Sha512,
    Md5,
}
