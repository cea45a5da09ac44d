//! secp256k1 field element implementation
//!
//! Elements of F_p with p = 2^256 - 2^32 - 977. Multiplication folds the
//! high half of the 512-bit product back in using 2^256 ≡ 2^32 + 977 (mod p)
//! instead of general long division.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::bigint::U256;
use crate::ec::field::FieldElement;
use crate::ec::k256::constants::{K256_FIELD_ELEMENT_SIZE, P, SQRT_EXP};
use crate::error::{Error, Result};

/// 2^256 mod p
const REDUCTION_C: u64 = 0x1_0000_03D1;

/// An element of the secp256k1 base field
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Secp256k1Field(U256);

impl Secp256k1Field {
    /// Create a field element; fails with a range error if `num >= p`
    pub fn new(num: U256) -> Result<Self> {
        if num >= P {
            return Err(Error::range(
                "Secp256k1Field",
                "value is not less than the field prime",
            ));
        }
        Ok(Self(num))
    }

    pub(crate) const fn new_unchecked(num: U256) -> Self {
        Self(num)
    }

    /// The additive identity
    pub const fn zero() -> Self {
        Self(U256::ZERO)
    }

    /// The multiplicative identity
    pub const fn one() -> Self {
        Self(U256::ONE)
    }

    /// Create from a small integer
    pub const fn from_u64(value: u64) -> Self {
        Self(U256::from_u64(value))
    }

    /// Deserialize from 32 big-endian bytes
    pub fn from_bytes(bytes: &[u8; K256_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        Self::new(U256::from_be_bytes(*bytes))
    }

    /// Serialize to 32 big-endian bytes
    pub fn to_bytes(&self) -> [u8; K256_FIELD_ELEMENT_SIZE] {
        self.0.to_be_bytes()
    }

    /// The element's integer value
    pub fn to_u256(&self) -> U256 {
        self.0
    }

    /// 64 zero-padded lowercase hex digits
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    /// True for zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// True if the integer value is odd
    pub fn is_odd(&self) -> bool {
        self.0.is_odd()
    }

    /// `self * self`
    pub fn square(&self) -> Self {
        *self * *self
    }

    /// `self + self`
    pub fn double(&self) -> Self {
        *self + *self
    }

    /// Raise to a power; the exponent is reduced modulo p - 1 first
    pub fn pow(&self, exponent: &U256) -> Self {
        let order = P.wrapping_sub(&U256::ONE);
        self.pow_reduced(&exponent.rem(&order))
    }

    fn pow_reduced(&self, exponent: &U256) -> Self {
        let mut result = Self::one();
        for i in (0..exponent.bits()).rev() {
            result = result.square();
            if exponent.bit(i) {
                result = result * *self;
            }
        }
        result
    }

    /// Multiplicative inverse via Fermat's little theorem
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::domain("Secp256k1Field::invert", "zero has no inverse"));
        }
        Ok(self.pow_reduced(&P.wrapping_sub(&U256::from(2u64))))
    }

    /// `self^((p+1)/4)`.
    ///
    /// This is a square root of `self` exactly when `self` is a quadratic
    /// residue; callers must check that the result squares back.
    pub fn sqrt(&self) -> Self {
        self.pow_reduced(&SQRT_EXP)
    }

    fn reduce_wide(t: [u64; 8]) -> Self {
        // First fold: lo + hi * C, at most 290 bits
        let mut r = [0u64; 5];
        let mut carry: u128 = 0;
        for i in 0..4 {
            let acc = t[i] as u128 + (t[i + 4] as u128) * (REDUCTION_C as u128) + carry;
            r[i] = acc as u64;
            carry = acc >> 64;
        }
        r[4] = carry as u64;

        // Second fold of the few bits above 2^256
        let mut out = [0u64; 4];
        let mut carry: u128 = (r[4] as u128) * (REDUCTION_C as u128);
        for i in 0..4 {
            let acc = r[i] as u128 + carry;
            out[i] = acc as u64;
            carry = acc >> 64;
        }

        let mut value = U256::from_limbs(out);
        if carry != 0 {
            // value is tiny here, so adding C cannot overflow again
            value = value.wrapping_add(&U256::from_u64(REDUCTION_C));
        }
        if value >= P {
            value = value.wrapping_sub(&P);
        }
        Self(value)
    }
}

impl Add for Secp256k1Field {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.add_mod(&rhs.0, &P))
    }
}

impl Sub for Secp256k1Field {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.sub_mod(&rhs.0, &P))
    }
}

impl Mul for Secp256k1Field {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::reduce_wide(self.0.mul_wide(&rhs.0))
    }
}

impl Neg for Secp256k1Field {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.neg_mod(&P))
    }
}

impl From<Secp256k1Field> for FieldElement {
    fn from(fe: Secp256k1Field) -> Self {
        FieldElement::new_unchecked(fe.0, P)
    }
}

impl TryFrom<FieldElement> for Secp256k1Field {
    type Error = Error;

    fn try_from(fe: FieldElement) -> Result<Self> {
        if fe.prime() != P {
            return Err(Error::range(
                "Secp256k1Field",
                "element belongs to a different field",
            ));
        }
        Ok(Self(fe.num()))
    }
}

impl fmt::Display for Secp256k1Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Secp256k1Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secp256k1Field(0x{})", self.to_hex())
    }
}
