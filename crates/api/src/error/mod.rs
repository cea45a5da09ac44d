//! Error handling for the bitecc ecosystem

pub mod traits;
pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, ErrorKind, Result};

// Re-export error traits
pub use traits::ResultExt;

// Re-export validation utilities module (not as a nested function)
pub use validate as validation;
