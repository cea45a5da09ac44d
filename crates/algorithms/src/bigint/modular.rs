//! Arithmetic modulo an arbitrary 256-bit modulus
//!
//! Every method here takes operands that are already reduced below the
//! modulus `m`, and `m` must be non-zero.

use super::{U256, LIMBS};

impl U256 {
    /// `self mod m`
    pub fn rem(&self, m: &Self) -> Self {
        if self < m {
            return *self;
        }
        let mut wide = [0u64; 2 * LIMBS];
        wide[..LIMBS].copy_from_slice(&self.0);
        Self::reduce_wide(&wide, m)
    }

    /// Reduce a 512-bit value modulo `m` by binary long division
    pub fn reduce_wide(wide: &[u64; 2 * LIMBS], m: &Self) -> Self {
        debug_assert!(!m.is_zero(), "modulus must be non-zero");
        let hi = Self([wide[4], wide[5], wide[6], wide[7]]);
        let lo = Self([wide[0], wide[1], wide[2], wide[3]]);

        // A high half already below m is its own remainder, so only the
        // low 256 bits remain to be folded in.
        let (mut rem, top) = if hi < *m {
            (hi, 256)
        } else {
            (Self::ZERO, 512)
        };
        for i in (0..top).rev() {
            let bit = if i >= 256 { hi.bit(i - 256) } else { lo.bit(i) };
            let (shifted, carry) = rem.shl1(bit);
            rem = if carry || shifted >= *m {
                shifted.wrapping_sub(m)
            } else {
                shifted
            };
        }
        rem
    }

    /// `(self + rhs) mod m`
    pub fn add_mod(&self, rhs: &Self, m: &Self) -> Self {
        let (sum, carry) = self.overflowing_add(rhs);
        if carry || sum >= *m {
            sum.wrapping_sub(m)
        } else {
            sum
        }
    }

    /// `(self - rhs) mod m`
    pub fn sub_mod(&self, rhs: &Self, m: &Self) -> Self {
        let (diff, borrow) = self.overflowing_sub(rhs);
        if borrow {
            diff.wrapping_add(m)
        } else {
            diff
        }
    }

    /// `(-self) mod m`
    pub fn neg_mod(&self, m: &Self) -> Self {
        if self.is_zero() {
            *self
        } else {
            m.wrapping_sub(self)
        }
    }

    /// `(self * rhs) mod m`
    pub fn mul_mod(&self, rhs: &Self, m: &Self) -> Self {
        Self::reduce_wide(&self.mul_wide(rhs), m)
    }

    /// `self^exp mod m` by left-to-right square-and-multiply.
    ///
    /// `0^0` is 1, and every result is 0 when `m` is 1.
    pub fn pow_mod(&self, exp: &Self, m: &Self) -> Self {
        let mut result = Self::ONE.rem(m);
        for i in (0..exp.bits()).rev() {
            result = result.mul_mod(&result, m);
            if exp.bit(i) {
                result = result.mul_mod(self, m);
            }
        }
        result
    }
}
