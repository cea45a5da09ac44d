//! Traditional (elliptic-curve) signature schemes

pub mod ecdsa;
