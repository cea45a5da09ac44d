//! Common implementations and shared functionality for the bitecc library
//!
//! This crate provides the secret-holding types used for private-key
//! material and signing nonces.

#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer};
