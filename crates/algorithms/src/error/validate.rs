//! Validation utilities for decoders and bulk operations

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

/// Turn a constant-time validity flag into a format error
///
/// Only call this at a decode boundary, where rejecting the input is public.
#[inline(always)]
pub fn format(is_valid: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::format(context, reason));
    }
    Ok(())
}
