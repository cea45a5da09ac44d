//! Byte and string encodings: Base58, Base58Check and little-endian integers

pub mod base58;
pub mod endian;

pub use base58::{
    decode as base58_decode, decode_with_checksum as base58_decode_with_checksum,
    encode as base58_encode, encode_with_checksum as base58_encode_with_checksum,
};
pub use endian::{flip_endian, little_endian_to_u256, u256_to_little_endian};
