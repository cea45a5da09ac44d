//! Error handling for the primitives
//!
//! The primitives share the error taxonomy of `bitecc-api`; this module
//! re-exports it under the paths the rest of the crate uses.

pub use bitecc_api::error::validation as validate;
pub use bitecc_api::error::{Error, ErrorKind, Result, ResultExt};
