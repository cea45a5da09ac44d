//! Validation utilities shared by the bitecc crates

use super::types::{Error, Result};

/// Validate a range condition
#[inline(always)]
pub fn range(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::range(context, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a DER structural condition
#[inline(always)]
pub fn der(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::signature_format(context, reason));
    }
    Ok(())
}
