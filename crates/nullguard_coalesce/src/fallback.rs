//! Fallback substitution and safe-call helpers.
//!
//! Every function here is total: it accepts an absent value and answers with
//! a substitute, a skipped callback, or an absent result.

use std::cmp::Ordering;
use std::fmt::Display;

/// Returns the value, or `fallback` if absent.
pub fn or_else_value<T>(value: Option<T>, fallback: T) -> T {
    value.unwrap_or(fallback)
}

/// Returns the value, or the possibly-absent `fallback`.
pub fn or_else_nullable<T>(value: Option<T>, fallback: Option<T>) -> Option<T> {
    value.or(fallback)
}

/// Returns the value, or evaluates `fallback` if absent.
///
/// `fallback` is never called when the value is present.
pub fn or_else_get<T, F>(value: Option<T>, fallback: F) -> T
where
    F: FnOnce() -> T,
{
    value.unwrap_or_else(fallback)
}

/// Returns the value, or the error produced by `error`.
///
/// # Errors
///
/// Returns `error()` if the value is absent.
pub fn or_else_throw<T, E, F>(value: Option<T>, error: F) -> Result<T, E>
where
    F: FnOnce() -> E,
{
    value.ok_or_else(error)
}

/// Returns the value, or the type's default (`0`, `false`, `""`, empty).
pub fn or_default_value<T: Default>(value: Option<T>) -> T {
    value.unwrap_or_default()
}

/// Returns the flag, or `true` if absent.
#[must_use]
pub fn or_true(value: Option<bool>) -> bool {
    value.unwrap_or(true)
}

/// Returns the text, or `""` if absent.
#[must_use]
pub fn or_empty(value: Option<&str>) -> &str {
    value.unwrap_or_default()
}

/// Applies `transform` to a present value.
pub fn safe_let<T, R, F>(value: Option<T>, transform: F) -> Option<R>
where
    F: FnOnce(T) -> R,
{
    value.map(transform)
}

/// Applies `transform` to a present value, or returns `default`.
pub fn let_or_default<T, R, F>(value: Option<T>, default: R, transform: F) -> R
where
    F: FnOnce(T) -> R,
{
    value.map_or(default, transform)
}

/// Applies `transform` to a present value, or evaluates `default`.
pub fn let_or_else_get<T, R, F, D>(value: Option<T>, transform: F, default: D) -> R
where
    F: FnOnce(T) -> R,
    D: FnOnce() -> R,
{
    value.map_or_else(default, transform)
}

/// Applies `transform` to a present value, or returns the error from `error`.
///
/// # Errors
///
/// Returns `error()` if the value is absent.
pub fn let_or_else_throw<T, R, E, F, X>(value: Option<T>, transform: F, error: X) -> Result<R, E>
where
    F: FnOnce(T) -> R,
    X: FnOnce() -> E,
{
    value.map(transform).ok_or_else(error)
}

/// Runs `action` on a present value and passes the value through.
pub fn safe_also<T, F>(value: Option<T>, action: F) -> Option<T>
where
    F: FnOnce(&T),
{
    if let Some(v) = &value {
        action(v);
    }
    value
}

/// Runs `action` if the value is absent and passes the value through.
pub fn if_null<T, F>(value: Option<T>, action: F) -> Option<T>
where
    F: FnOnce(),
{
    if value.is_none() {
        action();
    }
    value
}

/// Runs `action` on a present value and passes the value through.
pub fn if_not_null<T, F>(value: Option<T>, action: F) -> Option<T>
where
    F: FnOnce(&T),
{
    safe_also(value, action)
}

/// Runs exactly one of the two actions depending on presence.
pub fn if_not_null_else<T, P, A>(value: Option<T>, present: P, absent: A)
where
    P: FnOnce(T),
    A: FnOnce(),
{
    match value {
        Some(v) => present(v),
        None => absent(),
    }
}

/// Produces a result from exactly one of the two branches.
pub fn if_not_null_else_map<T, R, P, A>(value: Option<T>, present: P, absent: A) -> R
where
    P: FnOnce(T) -> R,
    A: FnOnce() -> R,
{
    value.map_or_else(absent, present)
}

/// Keeps the value only if it satisfies `predicate`.
pub fn take_if<T, P>(value: Option<T>, predicate: P) -> Option<T>
where
    P: FnOnce(&T) -> bool,
{
    value.filter(predicate)
}

/// Keeps the value only if it does not satisfy `predicate`.
pub fn take_unless<T, P>(value: Option<T>, predicate: P) -> Option<T>
where
    P: FnOnce(&T) -> bool,
{
    value.filter(|v| !predicate(v))
}

/// Keeps the text only if it is non-empty.
#[must_use]
pub fn take_if_not_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Keeps the text only if it contains a non-whitespace character.
#[must_use]
pub fn take_if_not_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.chars().all(char::is_whitespace))
}

/// Keeps the value only if it lies in `[min, max]`.
pub fn take_if_in_range<T: PartialOrd>(value: Option<T>, min: &T, max: &T) -> Option<T> {
    value.filter(|v| v >= min && v <= max)
}

/// Orders two possibly-absent values; absent sorts before present.
pub fn safe_compare<T: Ord>(a: Option<&T>, b: Option<&T>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

/// True if both are absent, or both present and equal.
pub fn safe_equals<T: PartialEq>(a: Option<&T>, b: Option<&T>) -> bool {
    a == b
}

/// Renders the value, or `"null"` if absent.
pub fn to_display_string<T: Display + ?Sized>(value: Option<&T>) -> String {
    to_string_or_default(value, "null")
}

/// Renders the value, or `""` if absent.
pub fn to_string_or_empty<T: Display + ?Sized>(value: Option<&T>) -> String {
    to_string_or_default(value, "")
}

/// Renders the value, or `default` if absent.
pub fn to_string_or_default<T: Display + ?Sized>(value: Option<&T>, default: &str) -> String {
    value.map_or_else(|| default.to_string(), ToString::to_string)
}
