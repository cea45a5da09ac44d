//! secp256k1 curve constants as 256-bit integers

use crate::bigint::U256;
use bitecc_params::traditional::secp256k1 as params;

/// Size of a field element in bytes
pub const K256_FIELD_ELEMENT_SIZE: usize = params::SECP256K1_FIELD_SIZE;

/// Size of a scalar in bytes
pub const K256_SCALAR_SIZE: usize = params::SECP256K1_SCALAR_SIZE;

/// Size of a compressed SEC point
pub const K256_POINT_COMPRESSED_SIZE: usize = params::SECP256K1_SEC_COMPRESSED_SIZE;

/// Size of an uncompressed SEC point
pub const K256_POINT_UNCOMPRESSED_SIZE: usize = params::SECP256K1_SEC_UNCOMPRESSED_SIZE;

/// Field prime p = 2^256 - 2^32 - 977
pub const P: U256 = U256::from_be_bytes(params::SECP256K1_P);

/// Group order n
pub const N: U256 = U256::from_be_bytes(params::SECP256K1_N);

/// Curve coefficient a = 0
pub const A: U256 = U256::from_u64(params::SECP256K1_A);

/// Curve coefficient b = 7
pub const B: U256 = U256::from_u64(params::SECP256K1_B);

/// Generator x-coordinate
pub const GX: U256 = U256::from_be_bytes(params::SECP256K1_GX);

/// Generator y-coordinate
pub const GY: U256 = U256::from_be_bytes(params::SECP256K1_GY);

/// (p + 1) / 4; valid as a square-root exponent because p ≡ 3 (mod 4)
pub const SQRT_EXP: U256 = U256::from_be_bytes(params::SECP256K1_SQRT_EXP);

/// n / 2, the bound for low-s signatures
pub const HALF_N: U256 = U256::from_be_bytes(params::SECP256K1_HALF_N);
