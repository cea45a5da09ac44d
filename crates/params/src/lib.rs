//! Constant values and typed parameters for the bitecc library
//!
//! Curve domain parameters live in [`traditional`]; hash sizes and the
//! Bitcoin string-encoding prefixes live in [`utils`].

pub mod traditional;
pub mod utils;

pub use utils::encoding::{Network, SecFormat};
