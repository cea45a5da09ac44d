//! # bitecc
//!
//! secp256k1 field arithmetic, group law and ECDSA, with the SEC, DER, WIF
//! and address encodings used by Bitcoin-style systems.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bitecc = "0.3"
//! ```
//!
//! ## Features
//!
//! - `algorithms` (default): big integers, fields, curves and encodings
//! - `sign` (default): ECDSA keys and signatures
//! - `serde`: serde support for the value types
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`bitecc-api`]: Error taxonomy and the `Serialize` trait
//! - [`bitecc-common`]: Zeroizing secret containers
//! - [`bitecc-params`]: Curve constants and network prefixes
//! - [`bitecc-algorithms`]: `U256`, finite fields, points, hashes, Base58
//! - [`bitecc-sign`]: ECDSA over secp256k1

// Core re-exports (always available)
pub use bitecc_api as api;
pub use bitecc_common as common;
pub use bitecc_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use bitecc_algorithms as algorithms;

#[cfg(feature = "sign")]
pub use bitecc_sign as sign;

/// Common imports for bitecc users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, ErrorKind, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::Serialize;

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretBuffer};

    pub use crate::params::{Network, SecFormat};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{FieldElement, Point, Secp256k1Field, Secp256k1Point, U256};

    #[cfg(feature = "sign")]
    pub use crate::sign::{verify, KeyPair, Message, PrivateKey, Signature, Verifier};
}
