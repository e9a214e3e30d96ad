// src/hashing/digest.rs
//! Digest and HMAC helpers over the RustCrypto hashes plus BLAKE3

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

use super::HashAlgorithm;

/// Compute the selected digest and return it as lowercase hex
pub fn hash_hex(algorithm: HashAlgorithm, data: &[u8]) -> String {
    match algorithm {
        HashAlgorithm::Sha1 => sha1_hex(data),
        HashAlgorithm::Sha256 => sha256_hex(data),
        HashAlgorithm::Sha512 => sha512_hex(data),
        HashAlgorithm::Md5 => md5_hex(data),
    }
}

/// Compute HMAC with the selected digest and return it as lowercase hex
pub fn hmac_hex(algorithm: HashAlgorithm, key: &[u8], data: &[u8]) -> String {
    match algorithm {
        HashAlgorithm::Sha1 => mac_hex::<Hmac<Sha1>>(key, data),
        HashAlgorithm::Sha256 => mac_hex::<Hmac<Sha256>>(key, data),
        HashAlgorithm::Sha512 => mac_hex::<Hmac<Sha512>>(key, data),
        HashAlgorithm::Md5 => mac_hex::<Hmac<Md5>>(key, data),
    }
}

/// SHA-1 hex digest
pub fn sha1_hex(data: &[u8]) -> String {
    hex::encode(Sha1::digest(data))
}

/// SHA-256 hex digest
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// SHA-512 hex digest
pub fn sha512_hex(data: &[u8]) -> String {
    hex::encode(Sha512::digest(data))
}

/// MD5 hex digest
pub fn md5_hex(data: &[u8]) -> String {
    hex::encode(Md5::digest(data))
}

/// Compute BLAKE3 hash and return as lowercase hex string
pub fn blake3_hex(data: &[u8]) -> String {
    blake3::Hasher::new().update(data).finalize().to_hex().to_string()
}

fn mac_hex<M: Mac + KeyInit>(key: &[u8], data: &[u8]) -> String {
    // HMAC accepts keys of any length
    let mut mac = <M as Mac>::new_from_slice(key).expect("HMAC key of any length");
    mac.update(data);
    hex::encode(mac.finalize().into_bytes())
}
