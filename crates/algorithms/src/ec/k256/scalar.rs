//! Scalars modulo the secp256k1 group order n

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::bigint::U256;
use crate::ec::k256::constants::{HALF_N, K256_SCALAR_SIZE, N};
use crate::error::{Error, Result};

/// An integer in `[0, n)`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Scalar(U256);

impl Scalar {
    /// Create a scalar; fails with a range error if `value >= n`
    pub fn new(value: U256) -> Result<Self> {
        if value >= N {
            return Err(Error::range("Scalar", "value is not less than the group order"));
        }
        Ok(Self(value))
    }

    /// `value mod n`
    pub fn reduce(value: &U256) -> Self {
        Self(value.rem(&N))
    }

    /// Deserialize from 32 big-endian bytes without reduction
    pub fn from_bytes(bytes: &[u8; K256_SCALAR_SIZE]) -> Result<Self> {
        Self::new(U256::from_be_bytes(*bytes))
    }

    /// Serialize to 32 big-endian bytes
    pub fn to_bytes(&self) -> [u8; K256_SCALAR_SIZE] {
        self.0.to_be_bytes()
    }

    /// The integer value
    pub fn to_u256(&self) -> U256 {
        self.0
    }

    /// The scalar 0
    pub const fn zero() -> Self {
        Self(U256::ZERO)
    }

    /// The scalar 1
    pub const fn one() -> Self {
        Self(U256::ONE)
    }

    /// True for zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// True if the value exceeds n / 2
    pub fn is_high(&self) -> bool {
        self.0 > HALF_N
    }

    /// Multiplicative inverse modulo n; zero is a domain error
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::domain("Scalar::invert", "zero has no inverse"));
        }
        let exp = N.wrapping_sub(&U256::from(2u64));
        Ok(Self(self.0.pow_mod(&exp, &N)))
    }
}

impl Add for Scalar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.add_mod(&rhs.0, &N))
    }
}

impl Sub for Scalar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.sub_mod(&rhs.0, &N))
    }
}

impl Mul for Scalar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0.mul_mod(&rhs.0, &N))
    }
}

impl Neg for Scalar {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.neg_mod(&N))
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// Scalars carry secrets and nonces, so the value is never printed
impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar([REDACTED])")
    }
}
