//! Clamping helpers.

use std::fmt::Debug;

use nullguard_foundation::{Error, Result};

/// Clamps `value` into `[min, max]`.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidBounds`](nullguard_foundation::ErrorKind::InvalidBounds)
/// if `min > max`.
pub fn coerce_in<T: PartialOrd + Debug>(value: T, min: T, max: T) -> Result<T> {
    if min > max {
        return Err(Error::invalid_bounds(min, max).with_context("coerce_in"));
    }
    Ok(if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    })
}

/// Raises `value` to at least `min`.
pub fn coerce_at_least<T: PartialOrd>(value: T, min: T) -> T {
    if value < min { min } else { value }
}

/// Lowers `value` to at most `max`.
pub fn coerce_at_most<T: PartialOrd>(value: T, max: T) -> T {
    if value > max { max } else { value }
}
