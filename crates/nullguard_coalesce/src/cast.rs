//! Runtime type narrowing over `dyn Any`.
//!
//! A mismatched or absent value yields `None` or the caller's fallback;
//! only [`require_cast`] reports a mismatch as an error.

use std::any::{Any, type_name};

use nullguard_foundation::{Error, Result};

/// Narrows a borrowed value to `T`, or `None` if it has another type.
#[must_use]
pub fn safe_cast<T: Any>(value: Option<&dyn Any>) -> Option<&T> {
    value?.downcast_ref::<T>()
}

/// Narrows an owned value to `T`, or `None` if it has another type.
#[must_use]
pub fn safe_cast_boxed<T: Any>(value: Option<Box<dyn Any>>) -> Option<T> {
    value?.downcast::<T>().ok().map(|boxed| *boxed)
}

/// Narrows a borrowed value to `T`.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidCast`](nullguard_foundation::ErrorKind::InvalidCast)
/// if the value is absent or has another type.
pub fn require_cast<T: Any>(value: Option<&dyn Any>) -> Result<&T> {
    safe_cast(value).ok_or_else(|| Error::invalid_cast(type_name::<T>()).with_context("require_cast"))
}

/// Narrows a borrowed value to `T`, or clones `default`.
pub fn cast_or_default<T: Any + Clone>(value: Option<&dyn Any>, default: T) -> T {
    safe_cast::<T>(value).cloned().unwrap_or(default)
}

/// Narrows a borrowed value to `T`, or evaluates `default`.
pub fn cast_or_else<T, F>(value: Option<&dyn Any>, default: F) -> T
where
    T: Any + Clone,
    F: FnOnce() -> T,
{
    safe_cast::<T>(value).cloned().unwrap_or_else(default)
}
