//! Digital Signature Schemes
//!
//! ECDSA over secp256k1: private keys and key pairs, signing with a
//! caller-supplied CSPRNG, verification, the DER signature codec and the
//! WIF private-key encoding.

#![forbid(unsafe_code)]

pub mod error;
pub mod traditional;

pub use error::{Error, ErrorKind, Result};
pub use traditional::ecdsa::secp256k1::{verify, KeyPair, Message, PrivateKey, Verifier};
pub use traditional::ecdsa::Signature;
