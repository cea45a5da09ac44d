//! ECDSA signature implementations
//!
//! [`common`] holds the curve-independent signature value and its DER
//! codec; [`secp256k1`] holds keys, signing and verification.

pub mod common;
pub mod secp256k1;

pub use common::Signature;
pub use secp256k1::{KeyPair, Message, PrivateKey, Verifier};
