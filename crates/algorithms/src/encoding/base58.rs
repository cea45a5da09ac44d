//! Base58 with the Bitcoin alphabet, plus the Base58Check envelope

use bitecc_params::utils::hash::BASE58_CHECKSUM_SIZE;
use tracing::trace;

use crate::error::{Error, Result};
use crate::hash::double_sha256;

/// Base58-encode `bytes`. Each leading zero byte becomes a leading `'1'`.
pub fn encode(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decode a Base58 string
pub fn decode(s: &str) -> Result<Vec<u8>> {
    bs58::decode(s)
        .into_vec()
        .map_err(|e| Error::encoding("base58", e.to_string()))
}

/// Append the first four bytes of double-SHA-256 and Base58-encode
pub fn encode_with_checksum(payload: &[u8]) -> String {
    let checksum = double_sha256(payload);
    let mut data = Vec::with_capacity(payload.len() + BASE58_CHECKSUM_SIZE);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum[..BASE58_CHECKSUM_SIZE]);
    encode(&data)
}

/// Decode Base58Check, verify the checksum and return the payload
pub fn decode_with_checksum(s: &str) -> Result<Vec<u8>> {
    let mut data = decode(s)?;
    if data.len() < BASE58_CHECKSUM_SIZE {
        return Err(Error::InvalidLength {
            context: "base58check",
            expected: BASE58_CHECKSUM_SIZE,
            actual: data.len(),
        });
    }
    let split = data.len() - BASE58_CHECKSUM_SIZE;
    let expected = double_sha256(&data[..split]);
    if data[split..] != expected[..BASE58_CHECKSUM_SIZE] {
        trace!(len = data.len(), "base58check checksum mismatch");
        return Err(Error::encoding("base58check", "checksum mismatch"));
    }
    data.truncate(split);
    Ok(data)
}
