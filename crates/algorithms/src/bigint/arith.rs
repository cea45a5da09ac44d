//! Limb-level arithmetic with explicit carries

use super::{U256, LIMBS};

impl U256 {
    /// Add, returning the wrapped sum and the carry out of bit 255
    pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; LIMBS];
        let mut carry = false;
        for (i, limb) in out.iter_mut().enumerate() {
            let (s1, c1) = self.0[i].overflowing_add(rhs.0[i]);
            let (s2, c2) = s1.overflowing_add(carry as u64);
            *limb = s2;
            carry = c1 | c2;
        }
        (Self(out), carry)
    }

    /// Subtract, returning the wrapped difference and the borrow
    pub fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; LIMBS];
        let mut borrow = false;
        for (i, limb) in out.iter_mut().enumerate() {
            let (d1, b1) = self.0[i].overflowing_sub(rhs.0[i]);
            let (d2, b2) = d1.overflowing_sub(borrow as u64);
            *limb = d2;
            borrow = b1 | b2;
        }
        (Self(out), borrow)
    }

    /// Sum modulo 2^256
    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        self.overflowing_add(rhs).0
    }

    /// Difference modulo 2^256
    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// Sum, or `None` on overflow
    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        match self.overflowing_add(rhs) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    /// Difference, or `None` if `rhs > self`
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Some(diff),
            (_, true) => None,
        }
    }

    /// Full 512-bit product as eight little-endian limbs
    pub fn mul_wide(&self, rhs: &Self) -> [u64; 2 * LIMBS] {
        let mut out = [0u64; 2 * LIMBS];
        for i in 0..LIMBS {
            let mut carry: u128 = 0;
            for j in 0..LIMBS {
                // (2^64-1)^2 + 2(2^64-1) < 2^128
                let t = (self.0[i] as u128) * (rhs.0[j] as u128) + out[i + j] as u128 + carry;
                out[i + j] = t as u64;
                carry = t >> 64;
            }
            out[i + LIMBS] = carry as u64;
        }
        out
    }

    /// Shift left by one, feeding `bit_in` into bit 0.
    ///
    /// Returns the shifted value and the bit shifted out of position 255.
    pub(crate) fn shl1(&self, bit_in: bool) -> (Self, bool) {
        let mut out = [0u64; LIMBS];
        let mut carry = bit_in as u64;
        for (i, limb) in out.iter_mut().enumerate() {
            *limb = (self.0[i] << 1) | carry;
            carry = self.0[i] >> 63;
        }
        (Self(out), carry == 1)
    }

    /// Shift right by one
    pub fn shr1(&self) -> Self {
        let mut out = [0u64; LIMBS];
        for (i, limb) in out.iter_mut().enumerate() {
            let high = if i + 1 < LIMBS { self.0[i + 1] << 63 } else { 0 };
            *limb = (self.0[i] >> 1) | high;
        }
        Self(out)
    }

    /// Quotient and remainder by a non-zero `u64`
    pub fn div_rem_u64(&self, divisor: u64) -> (Self, u64) {
        debug_assert!(divisor != 0, "division by zero");
        let mut quotient = [0u64; LIMBS];
        let mut rem: u128 = 0;
        for i in (0..LIMBS).rev() {
            let acc = (rem << 64) | self.0[i] as u128;
            quotient[i] = (acc / divisor as u128) as u64;
            rem = acc % divisor as u128;
        }
        (Self(quotient), rem as u64)
    }
}
