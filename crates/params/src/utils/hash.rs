//! Constants for hash functions

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of RIPEMD-160 in bytes
pub const RIPEMD160_OUTPUT_SIZE: usize = 20;

/// Output size of hash160 (RIPEMD-160 of SHA-256) in bytes
pub const HASH160_OUTPUT_SIZE: usize = RIPEMD160_OUTPUT_SIZE;

/// Length of the Base58Check checksum (prefix of double SHA-256)
pub const BASE58_CHECKSUM_SIZE: usize = 4;
