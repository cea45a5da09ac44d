//! Elliptic curve arithmetic
//!
//! [`field`] and [`point`] implement prime fields and the short Weierstrass
//! group law for arbitrary parameters; [`k256`] specializes both to
//! secp256k1.

pub mod field;
pub mod k256;
pub mod point;

pub use field::FieldElement;
pub use k256::{Scalar as K256Scalar, Secp256k1Field, Secp256k1Point};
pub use point::Point;
