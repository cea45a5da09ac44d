//! Koblitz secp256k1 Elliptic Curve Primitives
//!
//! The curve equation is y² = x³ + 7 over the prime field F_p where:
//! - p = 2^256 - 2^32 - 977
//! - The curve order n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
//!
//! [`Secp256k1Point`] specializes the generic [`Point`](crate::ec::point::Point)
//! to these parameters and adds the SEC and address encodings. Scalar
//! multiplication runs in Jacobian coordinates and converts back to affine
//! once at the end.

pub mod constants;
mod field;
mod point;
mod scalar;

pub use constants::{
    K256_FIELD_ELEMENT_SIZE, K256_POINT_COMPRESSED_SIZE, K256_POINT_UNCOMPRESSED_SIZE,
    K256_SCALAR_SIZE,
};
pub use field::Secp256k1Field;
pub use point::Secp256k1Point;
pub use scalar::Scalar;

use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::bigint::U256;
use crate::error::{Error, Result};

/// Get the standard base point G of the secp256k1 curve
pub fn base_point_g() -> Secp256k1Point {
    Secp256k1Point::generator()
}

/// Scalar multiplication with the base point: scalar * G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Secp256k1Point {
    Secp256k1Point::generator().mul(&scalar.to_u256())
}

/// General scalar multiplication: compute scalar * point
pub fn scalar_mult(scalar: &Scalar, point: &Secp256k1Point) -> Secp256k1Point {
    if point.is_identity() {
        return Secp256k1Point::identity();
    }
    point.mul(&scalar.to_u256())
}

/// Upper bound on redraws before a random source is treated as broken.
/// An honest source needs a second draw with probability below 2^-127.
pub const MAX_RANDOM_DRAWS: usize = 64;

/// Generate a secret scalar in `[1, n)` and its public point.
///
/// Candidates are drawn uniformly from `[0, 2^256)` and redrawn until one
/// lands in range.
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Scalar, Secp256k1Point)> {
    for attempt in 0..MAX_RANDOM_DRAWS {
        let candidate = U256::random(rng);
        match Scalar::new(candidate) {
            Ok(secret) if !secret.is_zero() => {
                let public = scalar_mult_base_g(&secret);
                return Ok((secret, public));
            }
            _ => debug!(attempt, "secret candidate outside [1, n), redrawing"),
        }
    }
    Err(Error::domain(
        "generate_keypair",
        "random source never produced a scalar in [1, n)",
    ))
}
