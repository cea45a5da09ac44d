//! Public API traits and types for the bitecc library
//!
//! This crate provides the public API surface for the bitecc ecosystem: the
//! error taxonomy shared by every member crate and the byte-serialization
//! trait implemented by the boundary types (points, signatures).

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorKind, Result, ResultExt};
pub use traits::Serialize;
