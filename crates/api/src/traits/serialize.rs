// File: crates/api/src/traits/serialize.rs

//! Traits for byte serialization of public cryptographic types.

use crate::Result;

/// A trait for public types that can be serialized to and from bytes.
///
/// `from_bytes` is a boundary operation: errors it returns are reported as
/// malformed external input (see [`crate::Error::is_malformed_input`]).
pub trait Serialize: Sized {
    /// Creates an object from a byte slice.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Converts the object to a byte vector.
    fn to_bytes(&self) -> Vec<u8>;
}
