//! Presence checks and the require/check assertions.
//!
//! The `require_*` family raises a caller error (illegal argument) and the
//! `check_*` family raises a state-invariant violation (illegal state). These
//! are the only functions of this crate that return an error for absent input.

use nullguard_foundation::{Container, Error, REQUIRED_VALUE_WAS_NULL, Result};

/// True if the value is absent.
#[must_use]
pub fn is_absent<T>(value: &Option<T>) -> bool {
    value.is_none()
}

/// True if the value is present.
#[must_use]
pub fn is_present<T>(value: &Option<T>) -> bool {
    value.is_some()
}

/// True if the value is absent or holds zero items.
#[must_use]
pub fn is_null_or_empty<C: Container + ?Sized>(value: Option<&C>) -> bool {
    value.is_none_or(|c| c.has_no_items())
}

/// True if the text is absent or consists only of whitespace.
#[must_use]
pub fn is_null_or_blank(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.chars().all(char::is_whitespace))
}

/// Returns the value or an illegal-argument error with the default message.
///
/// # Errors
///
/// Returns [`ErrorKind::IllegalArgument`](nullguard_foundation::ErrorKind::IllegalArgument)
/// if the value is absent.
pub fn require_not_null<T>(value: Option<T>) -> Result<T> {
    value.ok_or_else(|| Error::illegal_argument(REQUIRED_VALUE_WAS_NULL))
}

/// Returns the value or an illegal-argument error carrying `message`.
///
/// # Errors
///
/// Returns an illegal-argument error if the value is absent.
pub fn require_not_null_with<T>(value: Option<T>, message: impl Into<String>) -> Result<T> {
    value.ok_or_else(|| Error::illegal_argument(message))
}

/// Returns the value or an illegal-argument error whose message is built
/// only on failure.
///
/// # Errors
///
/// Returns an illegal-argument error if the value is absent.
pub fn require_not_null_else<T, F>(value: Option<T>, lazy_message: F) -> Result<T>
where
    F: FnOnce() -> String,
{
    value.ok_or_else(|| Error::illegal_argument(lazy_message()))
}

/// Returns the value or an illegal-state error with the default message.
///
/// # Errors
///
/// Returns [`ErrorKind::IllegalState`](nullguard_foundation::ErrorKind::IllegalState)
/// if the value is absent.
pub fn check_not_null<T>(value: Option<T>) -> Result<T> {
    value.ok_or_else(|| Error::illegal_state(REQUIRED_VALUE_WAS_NULL))
}

/// Returns the value or an illegal-state error carrying `message`.
///
/// # Errors
///
/// Returns an illegal-state error if the value is absent.
pub fn check_not_null_with<T>(value: Option<T>, message: impl Into<String>) -> Result<T> {
    value.ok_or_else(|| Error::illegal_state(message))
}

/// Returns the value or an illegal-state error whose message is built only
/// on failure.
///
/// # Errors
///
/// Returns an illegal-state error if the value is absent.
pub fn check_not_null_else<T, F>(value: Option<T>, lazy_message: F) -> Result<T>
where
    F: FnOnce() -> String,
{
    value.ok_or_else(|| Error::illegal_state(lazy_message()))
}
