//! Error types for the signature crate
//!
//! Signing and key handling report errors through the shared `bitecc-api`
//! taxonomy so callers match on a single [`ErrorKind`].

pub use bitecc_api::error::validation as validate;
pub use bitecc_api::error::{Error, ErrorKind, Result, ResultExt};
