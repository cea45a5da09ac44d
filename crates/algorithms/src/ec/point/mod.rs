//! Points on a short Weierstrass curve y² = x³ + a·x + b over a prime field
//!
//! [`Point`] is generic over the field: the coefficients are field elements
//! and every coordinate shares their prime. Curve membership is checked once
//! at construction, so the group law itself cannot fail except when points
//! from two different curves are combined.

use core::fmt;

use crate::bigint::U256;
use crate::ec::field::FieldElement;
use crate::error::{Error, Result};

/// An affine point, or the point at infinity when both coordinates are `None`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    x: Option<FieldElement>,
    y: Option<FieldElement>,
    a: FieldElement,
    b: FieldElement,
}

impl Point {
    /// Create the affine point (x, y) on y² = x³ + a·x + b.
    ///
    /// Fails with a range error if the four elements do not share a prime
    /// and with a curve error if (x, y) does not satisfy the equation.
    pub fn new(x: FieldElement, y: FieldElement, a: FieldElement, b: FieldElement) -> Result<Self> {
        Self::from_coordinates(Some(x), Some(y), a, b)
    }

    /// Create a point from optional coordinates.
    ///
    /// `(None, None)` is the point at infinity; exactly one `None` is a
    /// curve error.
    pub fn from_coordinates(
        x: Option<FieldElement>,
        y: Option<FieldElement>,
        a: FieldElement,
        b: FieldElement,
    ) -> Result<Self> {
        if a.prime() != b.prime() {
            return Err(Error::range("Point", "curve coefficients are in different fields"));
        }
        match (x, y) {
            (None, None) => Ok(Self { x, y, a, b }),
            (Some(px), Some(py)) => {
                if px.prime() != a.prime() || py.prime() != a.prime() {
                    return Err(Error::range(
                        "Point",
                        "coordinates are not in the curve's field",
                    ));
                }
                if !Self::satisfies_curve(&px, &py, &a, &b) {
                    return Err(Error::curve(
                        "Point",
                        format!("({}, {}) is not on the curve", px.num(), py.num()),
                    ));
                }
                Ok(Self { x, y, a, b })
            }
            _ => Err(Error::curve(
                "Point",
                "only one coordinate given; infinity needs neither",
            )),
        }
    }

    /// The point at infinity on y² = x³ + a·x + b
    pub fn infinity(a: FieldElement, b: FieldElement) -> Result<Self> {
        Self::from_coordinates(None, None, a, b)
    }

    /// Build without checking curve membership; callers guarantee it
    pub(crate) fn new_unchecked(
        x: Option<FieldElement>,
        y: Option<FieldElement>,
        a: FieldElement,
        b: FieldElement,
    ) -> Self {
        Self { x, y, a, b }
    }

    fn satisfies_curve(x: &FieldElement, y: &FieldElement, a: &FieldElement, b: &FieldElement) -> bool {
        let lhs = y.square();
        let rhs = x
            .square()
            .mul_unchecked(x)
            .add_unchecked(&a.mul_unchecked(x))
            .add_unchecked(b);
        lhs == rhs
    }

    /// The x-coordinate, `None` at infinity
    pub fn x(&self) -> Option<&FieldElement> {
        self.x.as_ref()
    }

    /// The y-coordinate, `None` at infinity
    pub fn y(&self) -> Option<&FieldElement> {
        self.y.as_ref()
    }

    /// Curve coefficient a
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// Curve coefficient b
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// True for the point at infinity
    pub fn is_infinity(&self) -> bool {
        self.x.is_none()
    }

    /// True if both points lie on the same curve
    pub fn same_curve(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b
    }

    fn identity_like(&self) -> Self {
        Self::new_unchecked(None, None, self.a, self.b)
    }

    /// Group addition; combining points on different curves is a curve error
    pub fn add(&self, other: &Self) -> Result<Self> {
        if !self.same_curve(other) {
            return Err(Error::curve("Point::add", "points are not on the same curve"));
        }
        Ok(self.add_same_curve(other))
    }

    pub(crate) fn add_same_curve(&self, other: &Self) -> Self {
        let (x1, y1, x2, y2) = match (self.x, self.y, other.x, other.y) {
            (None, _, _, _) => return other.clone(),
            (_, _, None, _) => return self.clone(),
            (Some(x1), Some(y1), Some(x2), Some(y2)) => (x1, y1, x2, y2),
            _ => return self.identity_like(),
        };

        if x1 == x2 {
            // Either P + (-P), or a doubling
            if y1 != y2 {
                return self.identity_like();
            }
            return self.double();
        }

        // The line is vertical exactly when x1 == x2, handled above
        let Some(inv) = x2.sub_unchecked(&x1).invert() else {
            return self.identity_like();
        };
        let slope = y2.sub_unchecked(&y1).mul_unchecked(&inv);
        let x3 = slope.square().sub_unchecked(&x1).sub_unchecked(&x2);
        let y3 = slope.mul_unchecked(&x1.sub_unchecked(&x3)).sub_unchecked(&y1);
        Self::new_unchecked(Some(x3), Some(y3), self.a, self.b)
    }

    /// `self + self`; a point with a vertical tangent (2y = 0) doubles to infinity
    pub fn double(&self) -> Self {
        let (Some(x1), Some(y1)) = (self.x, self.y) else {
            return self.clone();
        };
        let Some(inv) = y1.add_unchecked(&y1).invert() else {
            return self.identity_like();
        };
        // s = (3x² + a) / 2y
        let x_sq = x1.square();
        let slope = x_sq
            .add_unchecked(&x_sq)
            .add_unchecked(&x_sq)
            .add_unchecked(&self.a)
            .mul_unchecked(&inv);
        let x3 = slope.square().sub_unchecked(&x1.add_unchecked(&x1));
        let y3 = slope.mul_unchecked(&x1.sub_unchecked(&x3)).sub_unchecked(&y1);
        Self::new_unchecked(Some(x3), Some(y3), self.a, self.b)
    }

    /// The additive inverse (x, -y)
    pub fn neg(&self) -> Self {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Self::new_unchecked(Some(x), Some(y.neg()), self.a, self.b),
            _ => self.clone(),
        }
    }

    /// `k · self` by binary double-and-add, least significant bit first
    pub fn mul_scalar(&self, k: &U256) -> Self {
        let mut current = self.clone();
        let mut result = self.identity_like();
        for i in 0..k.bits() {
            if k.bit(i) {
                result = result.add_same_curve(&current);
            }
            current = current.double();
        }
        result
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.x, &self.y) {
            (Some(x), Some(y)) => write!(
                f,
                "Point({},{})_{}_{}",
                x.num(),
                y.num(),
                self.a.num(),
                self.b.num()
            ),
            _ => write!(f, "Point(infinity)"),
        }
    }
}

#[cfg(test)]
mod tests;
