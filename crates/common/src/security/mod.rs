//! Security primitives for handling sensitive material
//!
//! Secrets are zeroized when dropped and never printed by `Debug`.

pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, SecretBuffer};
