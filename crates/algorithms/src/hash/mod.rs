//! Hash functions used by the Bitcoin encodings
//!
//! Thin adapters over the RustCrypto `sha2` and `ripemd` crates returning
//! fixed-size arrays.

use bitecc_params::utils::hash::{HASH160_OUTPUT_SIZE, RIPEMD160_OUTPUT_SIZE, SHA256_OUTPUT_SIZE};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// SHA-256 of `data`
pub fn sha256(data: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
    let mut out = [0u8; SHA256_OUTPUT_SIZE];
    out.copy_from_slice(&Sha256::digest(data));
    out
}

/// RIPEMD-160 of `data`
pub fn ripemd160(data: &[u8]) -> [u8; RIPEMD160_OUTPUT_SIZE] {
    let mut out = [0u8; RIPEMD160_OUTPUT_SIZE];
    out.copy_from_slice(&Ripemd160::digest(data));
    out
}

/// RIPEMD-160(SHA-256(data)), the digest behind P2PKH addresses
pub fn hash160(data: &[u8]) -> [u8; HASH160_OUTPUT_SIZE] {
    ripemd160(&sha256(data))
}

/// SHA-256(SHA-256(data)), the digest behind Base58Check checksums
pub fn double_sha256(data: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
    sha256(&sha256(data))
}
