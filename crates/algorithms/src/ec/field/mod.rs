//! Elements of a prime field F_p for an arbitrary prime p < 2^256
//!
//! Each [`FieldElement`] carries its own prime, so elements of different
//! fields can coexist. Binary operations check that both operands share a
//! prime and fail with a range error otherwise. Primality of `p` is the
//! caller's responsibility; only `p > 1` is checked.

use core::fmt;

use crate::bigint::U256;
use crate::error::{validate, Error, Result};

/// An integer `num` with `0 <= num < prime`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldElement {
    num: U256,
    prime: U256,
}

impl FieldElement {
    /// Create an element of F_prime.
    ///
    /// Fails with a range error unless `prime > 1` and `num < prime`.
    pub fn new(num: U256, prime: U256) -> Result<Self> {
        validate::range(prime > U256::ONE, "FieldElement", "prime must be greater than 1")?;
        if num >= prime {
            return Err(Error::range(
                "FieldElement",
                format!("num {} not in field range 0 to {}", num, prime.wrapping_sub(&U256::ONE)),
            ));
        }
        Ok(Self { num, prime })
    }

    /// Create an element from small integers
    pub fn from_u64(num: u64, prime: u64) -> Result<Self> {
        Self::new(U256::from(num), U256::from(prime))
    }

    /// Build without checking; callers guarantee `num < prime`
    pub(crate) const fn new_unchecked(num: U256, prime: U256) -> Self {
        Self { num, prime }
    }

    /// The element's value
    pub fn num(&self) -> U256 {
        self.num
    }

    /// The field's prime
    pub fn prime(&self) -> U256 {
        self.prime
    }

    /// True for the additive identity
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// The element `k mod prime` of the same field
    pub fn with_num(&self, k: &U256) -> Self {
        Self::new_unchecked(k.rem(&self.prime), self.prime)
    }

    fn check_same_field(&self, other: &Self, context: &'static str) -> Result<()> {
        if self.prime != other.prime {
            return Err(Error::range(
                context,
                format!("cannot combine elements of F_{} and F_{}", self.prime, other.prime),
            ));
        }
        Ok(())
    }

    /// `self + other`
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_field(other, "FieldElement::add")?;
        Ok(self.add_unchecked(other))
    }

    /// `self - other`
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_field(other, "FieldElement::sub")?;
        Ok(self.sub_unchecked(other))
    }

    /// `self * other`
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.check_same_field(other, "FieldElement::mul")?;
        Ok(self.mul_unchecked(other))
    }

    /// `self / other`; dividing by zero is a domain error
    pub fn div(&self, other: &Self) -> Result<Self> {
        self.check_same_field(other, "FieldElement::div")?;
        let inv = other.inverse()?;
        Ok(self.mul_unchecked(&inv))
    }

    /// Additive inverse
    pub fn neg(&self) -> Self {
        Self::new_unchecked(self.num.neg_mod(&self.prime), self.prime)
    }

    /// `self * self`
    pub fn square(&self) -> Self {
        self.mul_unchecked(self)
    }

    /// Multiply by an integer, reduced modulo the prime first
    pub fn scale(&self, k: &U256) -> Self {
        self.mul_unchecked(&self.with_num(k))
    }

    /// Raise to a non-negative power.
    ///
    /// The exponent is reduced modulo `prime - 1` first, so a reduced
    /// exponent of 0 yields 1 for every base, including 0.
    pub fn pow(&self, exponent: &U256) -> Self {
        let order = self.prime.wrapping_sub(&U256::ONE);
        let e = exponent.rem(&order);
        Self::new_unchecked(self.num.pow_mod(&e, &self.prime), self.prime)
    }

    /// Raise to a signed power, using the Euclidean remainder modulo `prime - 1`
    pub fn pow_signed(&self, exponent: i64) -> Self {
        let order = self.prime.wrapping_sub(&U256::ONE);
        let magnitude = U256::from(exponent.unsigned_abs()).rem(&order);
        let e = if exponent < 0 {
            magnitude.neg_mod(&order)
        } else {
            magnitude
        };
        Self::new_unchecked(self.num.pow_mod(&e, &self.prime), self.prime)
    }

    /// Multiplicative inverse via Fermat's little theorem
    pub fn inverse(&self) -> Result<Self> {
        self.invert()
            .ok_or_else(|| Error::domain("FieldElement::inverse", "zero has no inverse"))
    }

    /// Multiplicative inverse, or `None` for zero
    pub(crate) fn invert(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let exp = self.prime.wrapping_sub(&U256::from(2u64));
        Some(Self::new_unchecked(self.num.pow_mod(&exp, &self.prime), self.prime))
    }

    // Infallible forms for callers that have already established a shared prime

    pub(crate) fn add_unchecked(&self, other: &Self) -> Self {
        debug_assert_eq!(self.prime, other.prime);
        Self::new_unchecked(self.num.add_mod(&other.num, &self.prime), self.prime)
    }

    pub(crate) fn sub_unchecked(&self, other: &Self) -> Self {
        debug_assert_eq!(self.prime, other.prime);
        Self::new_unchecked(self.num.sub_mod(&other.num, &self.prime), self.prime)
    }

    pub(crate) fn mul_unchecked(&self, other: &Self) -> Self {
        debug_assert_eq!(self.prime, other.prime);
        Self::new_unchecked(self.num.mul_mod(&other.num, &self.prime), self.prime)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement_{}({})", self.prime, self.num)
    }
}
