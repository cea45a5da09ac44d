//! Constants for hashing and string encodings

pub mod encoding;
pub mod hash;
