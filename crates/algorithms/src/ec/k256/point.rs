//! secp256k1 elliptic curve point operations

use core::fmt;
use core::ops::{Add, Neg};

use bitecc_api::Serialize;
use bitecc_params::traditional::secp256k1::{
    SEC_PREFIX_EVEN, SEC_PREFIX_ODD, SEC_PREFIX_UNCOMPRESSED,
};
use bitecc_params::utils::hash::HASH160_OUTPUT_SIZE;
use bitecc_params::{Network, SecFormat};

use crate::bigint::U256;
use crate::ec::field::FieldElement;
use crate::ec::k256::constants::{
    A, B, GX, GY, K256_FIELD_ELEMENT_SIZE, K256_POINT_COMPRESSED_SIZE,
    K256_POINT_UNCOMPRESSED_SIZE, P,
};
use crate::ec::k256::field::Secp256k1Field;
use crate::ec::point::Point;
use crate::encoding::base58;
use crate::error::{Error, Result, ResultExt};
use crate::hash::hash160;

/// A point on y² = x³ + 7 over the secp256k1 field, or the point at infinity
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Secp256k1Point {
    inner: Point,
}

/// A point in Jacobian coordinates: (X, Y, Z) represents (X/Z², Y/Z³).
/// Z = 0 is the point at infinity.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectivePoint {
    x: Secp256k1Field,
    y: Secp256k1Field,
    z: Secp256k1Field,
}

fn curve_a() -> FieldElement {
    FieldElement::new_unchecked(A, P)
}

fn curve_b() -> FieldElement {
    FieldElement::new_unchecked(B, P)
}

fn is_on_curve(x: &Secp256k1Field, y: &Secp256k1Field) -> bool {
    y.square() == x.square() * *x + Secp256k1Field::from_u64(7)
}

impl Secp256k1Point {
    /// Create a point from integer coordinates.
    ///
    /// Coordinates not below p are a range error; a pair off the curve is a
    /// curve error.
    pub fn new(x: U256, y: U256) -> Result<Self> {
        Self::from_affine(Secp256k1Field::new(x)?, Secp256k1Field::new(y)?)
    }

    /// Create a point from field coordinates, checking the curve equation
    pub fn from_affine(x: Secp256k1Field, y: Secp256k1Field) -> Result<Self> {
        if !is_on_curve(&x, &y) {
            return Err(Error::curve(
                "Secp256k1Point",
                format!("({}, {}) is not on secp256k1", x, y),
            ));
        }
        Ok(Self::from_affine_unchecked(x, y))
    }

    pub(crate) fn from_affine_unchecked(x: Secp256k1Field, y: Secp256k1Field) -> Self {
        Self {
            inner: Point::new_unchecked(Some(x.into()), Some(y.into()), curve_a(), curve_b()),
        }
    }

    /// The point at infinity
    pub fn identity() -> Self {
        Self {
            inner: Point::new_unchecked(None, None, curve_a(), curve_b()),
        }
    }

    /// The standard base point G
    pub fn generator() -> Self {
        Self::from_affine_unchecked(
            Secp256k1Field::new_unchecked(GX),
            Secp256k1Field::new_unchecked(GY),
        )
    }

    /// True for the point at infinity
    pub fn is_identity(&self) -> bool {
        self.inner.is_infinity()
    }

    /// The x-coordinate, `None` at infinity
    pub fn x(&self) -> Option<Secp256k1Field> {
        self.inner.x().map(|fe| Secp256k1Field::new_unchecked(fe.num()))
    }

    /// The y-coordinate, `None` at infinity
    pub fn y(&self) -> Option<Secp256k1Field> {
        self.inner.y().map(|fe| Secp256k1Field::new_unchecked(fe.num()))
    }

    /// View as a point of the generic curve type
    pub fn as_point(&self) -> &Point {
        &self.inner
    }

    fn coordinates(&self) -> Option<(Secp256k1Field, Secp256k1Field)> {
        Some((self.x()?, self.y()?))
    }

    /// Group addition
    pub fn add(&self, other: &Self) -> Self {
        self.to_projective().add(&other.to_projective()).to_affine()
    }

    /// `self + self`
    pub fn double(&self) -> Self {
        self.to_projective().double().to_affine()
    }

    /// The additive inverse
    pub fn negate(&self) -> Self {
        Self {
            inner: self.inner.neg(),
        }
    }

    /// Scalar multiplication `k · self`.
    ///
    /// Walks all 256 bits of `k` from the least significant, doubling
    /// once per bit, so the loop length does not depend on `k`.
    pub fn mul(&self, k: &U256) -> Self {
        let mut current = self.to_projective();
        let mut result = ProjectivePoint::identity();
        for i in 0..256 {
            if k.bit(i) {
                result = result.add(&current);
            }
            current = current.double();
        }
        result.to_affine()
    }

    /// SEC encoding of the point; the point at infinity has none
    pub fn sec(&self, format: SecFormat) -> Result<Vec<u8>> {
        Ok(match format {
            SecFormat::Compressed => self.sec_compressed()?.to_vec(),
            SecFormat::Uncompressed => self.sec_uncompressed()?.to_vec(),
        })
    }

    /// `0x02`/`0x03` (by parity of y) followed by x
    pub fn sec_compressed(&self) -> Result<[u8; K256_POINT_COMPRESSED_SIZE]> {
        let (x, y) = self.coordinates().ok_or_else(Self::infinity_has_no_encoding)?;
        let mut out = [0u8; K256_POINT_COMPRESSED_SIZE];
        out[0] = if y.is_odd() { SEC_PREFIX_ODD } else { SEC_PREFIX_EVEN };
        out[1..].copy_from_slice(&x.to_bytes());
        Ok(out)
    }

    /// `0x04` followed by x and y
    pub fn sec_uncompressed(&self) -> Result<[u8; K256_POINT_UNCOMPRESSED_SIZE]> {
        let (x, y) = self.coordinates().ok_or_else(Self::infinity_has_no_encoding)?;
        let mut out = [0u8; K256_POINT_UNCOMPRESSED_SIZE];
        out[0] = SEC_PREFIX_UNCOMPRESSED;
        out[1..1 + K256_FIELD_ELEMENT_SIZE].copy_from_slice(&x.to_bytes());
        out[1 + K256_FIELD_ELEMENT_SIZE..].copy_from_slice(&y.to_bytes());
        Ok(out)
    }

    fn infinity_has_no_encoding() -> Error {
        Error::curve("Secp256k1Point::sec", "the point at infinity has no SEC encoding")
    }

    /// Decode a compressed or uncompressed SEC point.
    ///
    /// All failures are reported as malformed input.
    pub fn parse(sec: &[u8]) -> Result<Self> {
        Self::parse_sec(sec).malformed("Secp256k1Point::parse")
    }

    fn parse_sec(sec: &[u8]) -> Result<Self> {
        let (&prefix, body) = sec
            .split_first()
            .ok_or_else(|| Error::encoding("SEC", "empty input"))?;
        match prefix {
            SEC_PREFIX_UNCOMPRESSED => {
                if sec.len() != K256_POINT_UNCOMPRESSED_SIZE {
                    return Err(Error::InvalidLength {
                        context: "SEC uncompressed",
                        expected: K256_POINT_UNCOMPRESSED_SIZE,
                        actual: sec.len(),
                    });
                }
                let (xb, yb) = body.split_at(K256_FIELD_ELEMENT_SIZE);
                let x = Secp256k1Field::new(U256::from_be_slice(xb)?)?;
                let y = Secp256k1Field::new(U256::from_be_slice(yb)?)?;
                Self::from_affine(x, y)
            }
            SEC_PREFIX_EVEN | SEC_PREFIX_ODD => {
                if sec.len() != K256_POINT_COMPRESSED_SIZE {
                    return Err(Error::InvalidLength {
                        context: "SEC compressed",
                        expected: K256_POINT_COMPRESSED_SIZE,
                        actual: sec.len(),
                    });
                }
                let x = Secp256k1Field::new(U256::from_be_slice(body)?)?;
                let alpha = x.square() * x + Secp256k1Field::from_u64(7);
                let beta = alpha.sqrt();
                if beta.square() != alpha {
                    return Err(Error::curve("SEC compressed", "x has no point on secp256k1"));
                }
                let want_odd = prefix == SEC_PREFIX_ODD;
                let y = if beta.is_odd() == want_odd { beta } else { -beta };
                Ok(Self::from_affine_unchecked(x, y))
            }
            other => Err(Error::encoding(
                "SEC",
                format!("unknown prefix 0x{:02x}", other),
            )),
        }
    }

    /// hash160 of the SEC encoding
    pub fn hash160(&self, format: SecFormat) -> Result<[u8; HASH160_OUTPUT_SIZE]> {
        Ok(hash160(&self.sec(format)?))
    }

    /// Base58Check P2PKH address: version byte for `network` followed by
    /// hash160 of the SEC encoding
    pub fn address(&self, format: SecFormat, network: Network) -> Result<String> {
        let h160 = self.hash160(format)?;
        let mut payload = Vec::with_capacity(1 + HASH160_OUTPUT_SIZE);
        payload.push(network.address_version());
        payload.extend_from_slice(&h160);
        Ok(base58::encode_with_checksum(&payload))
    }

    fn to_projective(&self) -> ProjectivePoint {
        match self.coordinates() {
            Some((x, y)) => ProjectivePoint {
                x,
                y,
                z: Secp256k1Field::one(),
            },
            None => ProjectivePoint::identity(),
        }
    }
}

impl Default for Secp256k1Point {
    fn default() -> Self {
        Self::identity()
    }
}

impl Add for &Secp256k1Point {
    type Output = Secp256k1Point;

    fn add(self, rhs: Self) -> Secp256k1Point {
        Secp256k1Point::add(self, rhs)
    }
}

impl Add for Secp256k1Point {
    type Output = Secp256k1Point;

    fn add(self, rhs: Self) -> Secp256k1Point {
        Secp256k1Point::add(&self, &rhs)
    }
}

impl Neg for Secp256k1Point {
    type Output = Secp256k1Point;

    fn neg(self) -> Secp256k1Point {
        self.negate()
    }
}

impl From<Secp256k1Point> for Point {
    fn from(p: Secp256k1Point) -> Self {
        p.inner
    }
}

impl TryFrom<Point> for Secp256k1Point {
    type Error = Error;

    fn try_from(point: Point) -> Result<Self> {
        if *point.a() != curve_a() || *point.b() != curve_b() {
            return Err(Error::curve("Secp256k1Point", "point is not on secp256k1"));
        }
        Ok(Self { inner: point })
    }
}

/// SEC1 byte form: compressed SEC for finite points and a single `0x00`
/// byte for the point at infinity
impl Serialize for Secp256k1Point {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if matches!(bytes, [0x00]) {
            return Ok(Self::identity());
        }
        Self::parse(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        match self.sec_compressed() {
            Ok(sec) => sec.to_vec(),
            Err(_) => vec![0x00],
        }
    }
}

impl fmt::Display for Secp256k1Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coordinates() {
            Some((x, y)) => write!(f, "Secp256k1Point({}, {})", x, y),
            None => write!(f, "Secp256k1Point(infinity)"),
        }
    }
}

impl ProjectivePoint {
    pub(crate) fn identity() -> Self {
        ProjectivePoint {
            x: Secp256k1Field::zero(),
            y: Secp256k1Field::one(),
            z: Secp256k1Field::zero(),
        }
    }

    fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    pub(crate) fn add(&self, other: &Self) -> Self {
        if self.is_identity() {
            return *other;
        }
        if other.is_identity() {
            return *self;
        }

        let z1_sq = self.z.square();
        let z2_sq = other.z.square();
        let u1 = self.x * z2_sq;
        let u2 = other.x * z1_sq;
        let s1 = self.y * z2_sq * other.z;
        let s2 = other.y * z1_sq * self.z;

        let h = u2 - u1;
        let r = s2 - s1;
        if h.is_zero() {
            if r.is_zero() {
                return self.double();
            }
            return Self::identity();
        }

        let h_sq = h.square();
        let h_cu = h_sq * h;
        let v = u1 * h_sq;

        let x3 = r.square() - h_cu - v.double();
        let y3 = r * (v - x3) - s1 * h_cu;
        let z3 = self.z * other.z * h;

        ProjectivePoint { x: x3, y: y3, z: z3 }
    }

    /// Doubling for a = 0 (dbl-2009-l)
    pub(crate) fn double(&self) -> Self {
        if self.is_identity() || self.y.is_zero() {
            return Self::identity();
        }
        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let d = ((self.x + b).square() - a - c).double();
        let e = a.double() + a;
        let f = e.square();

        let x3 = f - d.double();
        let eight_c = c.double().double().double();
        let y3 = e * (d - x3) - eight_c;
        let z3 = (self.y * self.z).double();

        ProjectivePoint { x: x3, y: y3, z: z3 }
    }

    pub(crate) fn to_affine(&self) -> Secp256k1Point {
        // Z is invertible exactly when the point is finite
        let Ok(z_inv) = self.z.invert() else {
            return Secp256k1Point::identity();
        };
        let z_inv_sq = z_inv.square();
        let z_inv_cu = z_inv_sq * z_inv;
        Secp256k1Point::from_affine_unchecked(self.x * z_inv_sq, self.y * z_inv_cu)
    }
}
