//! Common utilities for ECDSA implementations
//!
//! The signature value `(r, s)` and its strict DER codec:
//!
//! ```text
//! 0x30 len  0x02 len(r) r-bytes  0x02 len(s) s-bytes
//! ```
//!
//! Integers are minimal big-endian with a `0x00` pad when the top bit of
//! the first byte is set, so that DER reads them as non-negative.

use core::fmt;

use bitecc_algorithms::ec::k256::constants::{HALF_N, N};
use bitecc_algorithms::ec::k256::Scalar;
use bitecc_algorithms::bigint::U256_BYTES;
use bitecc_algorithms::U256;
use bitecc_api::Serialize;

use crate::error::{validate, Error, Result, ResultExt};

const DER_SEQUENCE: u8 = 0x30;
const DER_INTEGER: u8 = 0x02;
const DER_CONTEXT: &str = "DER signature";

/// Largest DER integer body for a 256-bit value: a pad byte plus 32 bytes
const MAX_INTEGER_LEN: usize = 33;

fn in_scalar_range(v: &U256) -> bool {
    !v.is_zero() && *v < N
}

/// ECDSA signature components (r, s), both in `[1, n-1]`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(U256, U256)", into = "(U256, U256)")
)]
pub struct Signature {
    r: U256,
    s: U256,
}

impl Signature {
    /// Create a signature; either component outside `[1, n-1]` is a range error
    pub fn new(r: U256, s: U256) -> Result<Self> {
        validate::range(in_scalar_range(&r), "Signature", "r must lie in [1, n-1]")?;
        validate::range(in_scalar_range(&s), "Signature", "s must lie in [1, n-1]")?;
        Ok(Self { r, s })
    }

    /// Callers guarantee both scalars are non-zero
    pub(crate) fn from_scalars(r: Scalar, s: Scalar) -> Self {
        debug_assert!(!r.is_zero() && !s.is_zero());
        Self {
            r: r.to_u256(),
            s: s.to_u256(),
        }
    }

    /// The r component
    pub fn r(&self) -> U256 {
        self.r
    }

    /// The s component
    pub fn s(&self) -> U256 {
        self.s
    }

    /// True if `s <= n/2`, the canonical form produced by signing
    pub fn is_low_s(&self) -> bool {
        self.s <= HALF_N
    }

    /// Serialize signature to DER format
    pub fn der(&self) -> Vec<u8> {
        let mut body = Vec::with_capacity(2 * (2 + MAX_INTEGER_LEN));
        encode_integer(&self.r, &mut body);
        encode_integer(&self.s, &mut body);

        // At most 70 bytes, so the short length form always applies
        let mut der = Vec::with_capacity(2 + body.len());
        der.push(DER_SEQUENCE);
        der.push(body.len() as u8);
        der.extend_from_slice(&body);
        der
    }

    /// Parse signature from DER format.
    ///
    /// Parsing is strict: anything but exactly one canonical encoding of a
    /// valid signature fails, reported as malformed input.
    pub fn parse(der: &[u8]) -> Result<Self> {
        Self::parse_der(der).malformed("Signature::parse")
    }

    fn parse_der(der: &[u8]) -> Result<Self> {
        let mut reader = DerReader::new(der);

        let compound = reader.byte("sequence marker")?;
        validate::der(compound == DER_SEQUENCE, DER_CONTEXT, "bad sequence marker")?;

        let length = reader.byte("sequence length")? as usize;
        validate::der(
            length == reader.remaining(),
            DER_CONTEXT,
            "declared length does not match the input",
        )?;

        let r = reader.integer("r")?;
        let s = reader.integer("s")?;
        validate::der(reader.remaining() == 0, DER_CONTEXT, "trailing bytes after s")?;

        Self::new(r, s).wrap_err(|| {
            Error::signature_format(DER_CONTEXT, "r and s must lie in [1, n-1]")
        })
    }
}

fn encode_integer(value: &U256, out: &mut Vec<u8>) {
    let bytes = value.to_be_bytes_trimmed();
    out.push(DER_INTEGER);
    if bytes[0] & 0x80 != 0 {
        out.push(bytes.len() as u8 + 1);
        out.push(0x00);
    } else {
        out.push(bytes.len() as u8);
    }
    out.extend_from_slice(&bytes);
}

struct DerReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> DerReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn byte(&mut self, what: &'static str) -> Result<u8> {
        let b = *self.bytes.get(self.pos).ok_or_else(|| {
            Error::signature_format(DER_CONTEXT, format!("input ends before {}", what))
        })?;
        self.pos += 1;
        Ok(b)
    }

    fn take(&mut self, len: usize, what: &'static str) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(Error::signature_format(
                DER_CONTEXT,
                format!("{} overruns the input", what),
            ));
        }
        let slice = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn integer(&mut self, name: &'static str) -> Result<U256> {
        let marker = self.byte(name)?;
        if marker != DER_INTEGER {
            return Err(Error::signature_format(
                DER_CONTEXT,
                format!("bad integer marker 0x{:02x} for {}", marker, name),
            ));
        }
        let len = self.byte(name)? as usize;
        let body = self.take(len, name)?;

        match body {
            [] => Err(Error::signature_format(DER_CONTEXT, format!("{} is empty", name))),
            [first, ..] if first & 0x80 != 0 => Err(Error::signature_format(
                DER_CONTEXT,
                format!("{} is negative", name),
            )),
            [0x00, second, ..] if second & 0x80 == 0 => Err(Error::signature_format(
                DER_CONTEXT,
                format!("{} is not minimally encoded", name),
            )),
            [0x00, rest @ ..] => Self::magnitude(rest, name),
            _ => Self::magnitude(body, name),
        }
    }

    fn magnitude(bytes: &[u8], name: &'static str) -> Result<U256> {
        if bytes.len() > U256_BYTES {
            return Err(Error::signature_format(
                DER_CONTEXT,
                format!("{} is wider than 256 bits", name),
            ));
        }
        U256::from_be_slice(bytes)
    }
}

impl TryFrom<(U256, U256)> for Signature {
    type Error = Error;

    fn try_from((r, s): (U256, U256)) -> Result<Self> {
        Self::new(r, s)
    }
}

impl From<Signature> for (U256, U256) {
    fn from(sig: Signature) -> Self {
        (sig.r, sig.s)
    }
}

impl Serialize for Signature {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::parse(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.der()
    }
}

/// The leading four decimal digits of each component
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.r.to_string();
        let s = self.s.to_string();
        write!(
            f,
            "Signature({}.., {}..)",
            &r[..r.len().min(4)],
            &s[..s.len().min(4)]
        )
    }
}
