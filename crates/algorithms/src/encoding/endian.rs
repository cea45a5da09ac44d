//! Little-endian conversions between byte strings and integers

use crate::bigint::{U256, U256_BYTES};
use crate::error::{Error, Result};

/// Interpret up to 32 bytes as a little-endian unsigned integer
pub fn little_endian_to_u256(bytes: &[u8]) -> Result<U256> {
    U256::from_le_slice(bytes)
}

/// Encode `n` as exactly `length` little-endian bytes.
///
/// Fails with a range error if `n` does not fit or `length` exceeds 32.
pub fn u256_to_little_endian(n: &U256, length: usize) -> Result<Vec<u8>> {
    if length > U256_BYTES {
        return Err(Error::InvalidLength {
            context: "u256_to_little_endian",
            expected: U256_BYTES,
            actual: length,
        });
    }
    if n.bits() > 8 * length {
        return Err(Error::range(
            "u256_to_little_endian",
            format!("{} does not fit in {} bytes", n, length),
        ));
    }
    let mut bytes = n.to_be_bytes();
    bytes.reverse();
    Ok(bytes[..length].to_vec())
}

/// Reverse the byte order of a hex string
pub fn flip_endian(hex_str: &str) -> Result<String> {
    let mut bytes =
        hex::decode(hex_str).map_err(|e| Error::encoding("flip_endian", e.to_string()))?;
    bytes.reverse();
    Ok(hex::encode(bytes))
}
