//! Shared fixtures for the bitecc integration tests
pub mod vectors;

use bitecc_algorithms::U256;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Parse a hex integer fixture
pub fn u256(hex: &str) -> U256 {
    U256::from_hex(hex).unwrap_or_else(|e| panic!("bad fixture {}: {}", hex, e))
}

/// Decode a hex byte-string fixture
pub fn bytes(hex: &str) -> Vec<u8> {
    hex::decode(hex).unwrap_or_else(|e| panic!("bad fixture {}: {}", hex, e))
}

/// Deterministic RNG so failures reproduce
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
