//! Validation utilities shared by the engine crates

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter { context, message });
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

/// Validate that a value was reduced
#[inline(always)]
pub fn canonical(is_reduced: bool, context: &'static str) -> Result<()> {
    if !is_reduced {
        return Err(Error::NotCanonical { context });
    }
    Ok(())
}
