//! Validation utilities for ring arithmetic

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate that a divisor is not zero
#[inline(always)]
pub fn nonzero_divisor(is_zero: bool, context: &'static str) -> Result<()> {
    if is_zero {
        return Err(Error::DivisionByZero { context });
    }
    Ok(())
}
