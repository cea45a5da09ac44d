//! ECDSA over secp256k1
//!
//! Signing draws its nonce from a caller-supplied CSPRNG and normalizes
//! `s` to the lower half of `[1, n-1]`. Verification accepts a signature
//! when `(u·G + v·Q).x mod n == r`.

mod keys;

pub use keys::{KeyPair, PrivateKey};

use bitecc_algorithms::ec::k256::{scalar_mult_base_g, Scalar, Secp256k1Point};
use bitecc_algorithms::hash::hash160;
use bitecc_algorithms::U256;
use tracing::trace;

use crate::traditional::ecdsa::common::Signature;

/// The value being signed or verified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message<'a> {
    /// A raw 256-bit digest, reduced modulo n before use
    Digest(U256),
    /// Legacy mode: the digest is the big-endian integer value of
    /// `hash160(bytes)`. This is not a standard message-digest convention.
    Hash160(&'a [u8]),
}

impl Message<'_> {
    /// The integer digest before reduction
    pub fn digest(&self) -> U256 {
        match self {
            Message::Digest(z) => *z,
            Message::Hash160(data) => {
                let mut buf = [0u8; 32];
                buf[12..].copy_from_slice(&hash160(data));
                U256::from_be_bytes(buf)
            }
        }
    }

    /// The digest as a scalar modulo n
    pub fn to_scalar(&self) -> Scalar {
        Scalar::reduce(&self.digest())
    }
}

impl From<U256> for Message<'_> {
    fn from(z: U256) -> Self {
        Message::Digest(z)
    }
}

/// Verify `signature` over `message` against the public point.
///
/// Returns `false` for any invalid signature, including a public key or
/// combined point at infinity; it never fails.
pub fn verify<'a>(
    public: &Secp256k1Point,
    message: impl Into<Message<'a>>,
    signature: &Signature,
) -> bool {
    if public.is_identity() {
        trace!("verification against the point at infinity");
        return false;
    }
    let z = message.into().to_scalar();
    let r = Scalar::reduce(&signature.r());
    let Ok(s_inv) = Scalar::reduce(&signature.s()).invert() else {
        return false;
    };
    let u = z * s_inv;
    let v = r * s_inv;
    let total = scalar_mult_base_g(&u).add(&public.mul(&v.to_u256()));
    let valid = match total.x() {
        Some(x) => Scalar::reduce(&x.to_u256()) == r,
        None => false,
    };
    trace!(valid, "ecdsa verification");
    valid
}

/// Signature verification as a method of the public point
pub trait Verifier {
    /// Verify `signature` over `message` with `self` as the public key
    fn verify<'a, M: Into<Message<'a>>>(&self, message: M, signature: &Signature) -> bool;
}

impl Verifier for Secp256k1Point {
    fn verify<'a, M: Into<Message<'a>>>(&self, message: M, signature: &Signature) -> bool {
        verify(self, message, signature)
    }
}
