//! Arithmetic primitives for secp256k1 and Bitcoin-style encodings
//!
//! This crate provides, bottom-up:
//!
//! - [`bigint::U256`], the fixed-width integer everything else is built on
//! - [`ec::FieldElement`] and [`ec::Point`], a prime field and elliptic curve
//!   group law for arbitrary parameters
//! - [`ec::k256`], the same specialized to secp256k1, with SEC encodings and
//!   P2PKH addresses
//! - [`hash`] and [`encoding`], the SHA-256 / RIPEMD-160 digests and the
//!   Base58Check and little-endian helpers the encodings need

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, ErrorKind, Result, ResultExt};

pub mod bigint;
pub use bigint::U256;

// Elliptic Curve primitives
pub mod ec;
pub use ec::{k256, FieldElement, Point, Secp256k1Field, Secp256k1Point};

pub mod encoding;
pub mod hash;
