//! Error handling traits for the bitecc ecosystem

use super::types::{Error, Result};

/// Extension trait for Result types
pub trait ResultExt<T>: Sized {
    /// Mark an error as malformed external input to `context`
    fn malformed(self, context: &'static str) -> Result<T>;

    /// Replace any error with one produced by `f`
    fn wrap_err<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> Error;
}

impl<T, E: Into<Error>> ResultExt<T> for core::result::Result<T, E> {
    fn malformed(self, context: &'static str) -> Result<T> {
        self.map_err(|e| e.into().into_malformed(context))
    }

    fn wrap_err<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> Error,
    {
        self.map_err(|_| f())
    }
}
