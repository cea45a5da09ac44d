//! Fixed-width 256-bit unsigned integers
//!
//! [`U256`] is the integer type behind every field element, scalar and
//! signature component in this crate. It stores four 64-bit limbs in
//! little-endian order and offers exactly the operations the curve code
//! needs: carry-propagating add/sub, a full 512-bit product, modular
//! reduction and conversions to and from big-endian bytes, hex and decimal.

mod arith;
mod modular;

use core::cmp::Ordering;
use core::fmt;

use rand::RngCore;
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Number of bytes in the big-endian encoding of a [`U256`]
pub const U256_BYTES: usize = 32;

const LIMBS: usize = 4;

/// A 256-bit unsigned integer
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct U256(pub(crate) [u64; LIMBS]);

impl U256 {
    /// The value 0
    pub const ZERO: Self = Self([0; LIMBS]);
    /// The value 1
    pub const ONE: Self = Self([1, 0, 0, 0]);
    /// The value 2^256 - 1
    pub const MAX: Self = Self([u64::MAX; LIMBS]);

    /// Build from little-endian 64-bit limbs
    pub const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
        Self(limbs)
    }

    /// Little-endian 64-bit limbs
    pub const fn limbs(&self) -> [u64; LIMBS] {
        self.0
    }

    /// Build from a `u64`
    pub const fn from_u64(value: u64) -> Self {
        Self([value, 0, 0, 0])
    }

    /// Interpret 32 bytes as a big-endian integer
    pub const fn from_be_bytes(bytes: [u8; U256_BYTES]) -> Self {
        let mut limbs = [0u64; LIMBS];
        let mut i = 0;
        while i < LIMBS {
            let offset = U256_BYTES - 8 * (i + 1);
            let mut limb = 0u64;
            let mut j = 0;
            while j < 8 {
                limb = (limb << 8) | bytes[offset + j] as u64;
                j += 1;
            }
            limbs[i] = limb;
            i += 1;
        }
        Self(limbs)
    }

    /// Big-endian 32-byte encoding
    pub fn to_be_bytes(&self) -> [u8; U256_BYTES] {
        let mut out = [0u8; U256_BYTES];
        for (i, limb) in self.0.iter().enumerate() {
            let offset = U256_BYTES - 8 * (i + 1);
            out[offset..offset + 8].copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    /// Interpret up to 32 bytes as a big-endian integer.
    ///
    /// Shorter inputs are zero-extended on the left; the empty slice is 0.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > U256_BYTES {
            return Err(Error::InvalidLength {
                context: "U256::from_be_slice",
                expected: U256_BYTES,
                actual: bytes.len(),
            });
        }
        let mut buf = [0u8; U256_BYTES];
        buf[U256_BYTES - bytes.len()..].copy_from_slice(bytes);
        Ok(Self::from_be_bytes(buf))
    }

    /// Interpret up to 32 bytes as a little-endian integer
    pub fn from_le_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > U256_BYTES {
            return Err(Error::InvalidLength {
                context: "U256::from_le_slice",
                expected: U256_BYTES,
                actual: bytes.len(),
            });
        }
        let mut buf = [0u8; U256_BYTES];
        for (dst, src) in buf.iter_mut().rev().zip(bytes) {
            *dst = *src;
        }
        Ok(Self::from_be_bytes(buf))
    }

    /// Big-endian bytes with leading zero bytes removed.
    ///
    /// Zero encodes as a single `0x00` byte.
    pub fn to_be_bytes_trimmed(&self) -> Vec<u8> {
        let bytes = self.to_be_bytes();
        let start = bytes
            .iter()
            .position(|&b| b != 0)
            .unwrap_or(U256_BYTES - 1);
        bytes[start..].to_vec()
    }

    /// Parse 1 to 64 hex digits, with or without a `0x` prefix
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty() || digits.len() > 2 * U256_BYTES {
            return Err(Error::encoding(
                "U256::from_hex",
                format!("expected 1 to 64 hex digits, got {}", digits.len()),
            ));
        }
        let padded = format!("{:0>64}", digits);
        let mut buf = [0u8; U256_BYTES];
        hex::decode_to_slice(&padded, &mut buf)
            .map_err(|e| Error::encoding("U256::from_hex", e.to_string()))?;
        Ok(Self::from_be_bytes(buf))
    }

    /// 64 lowercase hex digits, zero-padded
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_be_bytes())
    }

    /// Draw a uniformly random value in `[0, 2^256)`
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut buf = [0u8; U256_BYTES];
        rng.fill_bytes(&mut buf);
        Self::from_be_bytes(buf)
    }

    /// True if the value is 0
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    /// True if the lowest bit is set
    pub fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    /// Bit `i`, counting from the least significant. Bits at 256 and above are 0.
    pub fn bit(&self, i: usize) -> bool {
        if i >= 64 * LIMBS {
            return false;
        }
        (self.0[i / 64] >> (i % 64)) & 1 == 1
    }

    /// Position of the highest set bit plus one; 0 for the value 0
    pub fn bits(&self) -> usize {
        for i in (0..LIMBS).rev() {
            if self.0[i] != 0 {
                return 64 * i + 64 - self.0[i].leading_zeros() as usize;
            }
        }
        0
    }

    /// The low 64 bits
    pub fn low_u64(&self) -> u64 {
        self.0[0]
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u32> for U256 {
    fn from(value: u32) -> Self {
        Self::from_u64(value as u64)
    }
}

impl From<[u8; U256_BYTES]> for U256 {
    fn from(bytes: [u8; U256_BYTES]) -> Self {
        Self::from_be_bytes(bytes)
    }
}

impl Zeroize for U256 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..LIMBS).rev() {
            match self.0[i].cmp(&other.0[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// 10^19 is the largest power of ten that fits in a u64
const DECIMAL_CHUNK: u64 = 10_000_000_000_000_000_000;

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chunks = Vec::new();
        let mut rest = *self;
        loop {
            let (q, r) = rest.div_rem_u64(DECIMAL_CHUNK);
            chunks.push(r);
            if q.is_zero() {
                break;
            }
            rest = q;
        }
        let mut s = String::with_capacity(78);
        for (i, chunk) in chunks.iter().rev().enumerate() {
            if i == 0 {
                s.push_str(&chunk.to_string());
            } else {
                s.push_str(&format!("{:019}", chunk));
            }
        }
        f.pad_integral(true, "", &s)
    }
}

impl fmt::LowerHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full = self.to_hex();
        let trimmed = full.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        f.pad_integral(true, "0x", digits)
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U256(0x{})", self.to_hex())
    }
}
