//! Validation utilities for pairing primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that decoded bytes landed in the expected group
#[inline(always)]
pub fn point(is_valid: bool, group: &'static str, reason: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::Point { group, reason });
    }
    Ok(())
}
