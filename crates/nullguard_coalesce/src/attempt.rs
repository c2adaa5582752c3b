//! Fault suppression: run a block and turn any fault into an absent or
//! default result.
//!
//! A fault is either an `Err` returned by the block or a panic raised inside
//! it. This is the only place in nullguard where faults are swallowed, and
//! only because the caller chose one of these wrappers. Each suppression is
//! reported as a `debug` event on the `nullguard::attempt` target.

use std::any::Any;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

use nullguard_foundation::Fault;

/// Runs `block`, capturing both returned errors and panics.
fn capture<T, E, F>(block: F) -> Result<T, Fault<E>>
where
    F: FnOnce() -> Result<T, E>,
{
    match panic::catch_unwind(AssertUnwindSafe(block)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(Fault::Failed(err)),
        Err(payload) => Err(Fault::Panicked(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

fn report<E: Debug>(fault: &Fault<E>) {
    tracing::debug!(target: "nullguard::attempt", ?fault, "suppressed fault");
}

/// Runs `block`; any fault becomes `None`.
pub fn try_or_none<T, E, F>(block: F) -> Option<T>
where
    E: Debug,
    F: FnOnce() -> Result<T, E>,
{
    capture(block).inspect_err(report).ok()
}

/// Runs `block`; any fault is handed to `on_fault` and becomes `None`.
pub fn try_or_none_observed<T, E, F, O>(block: F, on_fault: O) -> Option<T>
where
    E: Debug,
    F: FnOnce() -> Result<T, E>,
    O: FnOnce(Fault<E>),
{
    match capture(block) {
        Ok(value) => Some(value),
        Err(fault) => {
            report(&fault);
            on_fault(fault);
            None
        }
    }
}

/// Runs `block`; any fault becomes `default`.
pub fn try_or_default<T, E, F>(default: T, block: F) -> T
where
    E: Debug,
    F: FnOnce() -> Result<T, E>,
{
    try_or_none(block).unwrap_or(default)
}

/// Runs `block`; any fault is handed to `on_fault` and becomes `default`.
pub fn try_or_default_observed<T, E, F, O>(default: T, block: F, on_fault: O) -> T
where
    E: Debug,
    F: FnOnce() -> Result<T, E>,
    O: FnOnce(Fault<E>),
{
    try_or_none_observed(block, on_fault).unwrap_or(default)
}

/// Runs `block`; any fault is replaced by the result of `fallback`.
///
/// `fallback` runs outside the fault guard, so a panic inside it propagates.
pub fn try_or_else<T, E, F, G>(block: F, fallback: G) -> T
where
    E: Debug,
    F: FnOnce() -> Result<T, E>,
    G: FnOnce() -> T,
{
    try_or_none(block).unwrap_or_else(fallback)
}

/// Applies a fallible `transform` to a present value; absence or any fault
/// yields `None`.
pub fn try_map<T, R, E, F>(value: Option<T>, transform: F) -> Option<R>
where
    E: Debug,
    F: FnOnce(T) -> Result<R, E>,
{
    let value = value?;
    try_or_none(|| transform(value))
}

/// Applies a fallible `transform` to a present value; absence or any fault
/// yields `default`.
pub fn try_map_or_default<T, R, E, F>(value: Option<T>, default: R, transform: F) -> R
where
    E: Debug,
    F: FnOnce(T) -> Result<R, E>,
{
    try_map(value, transform).unwrap_or(default)
}

/// Runs an infallible `supplier`; a panic becomes `None`.
pub fn lazy_or_none<T, F>(supplier: F) -> Option<T>
where
    F: FnOnce() -> T,
{
    try_or_none(|| Ok::<T, Never>(supplier()))
}

/// Runs an infallible `supplier`; a panic becomes `default`.
pub fn lazy_or_default<T, F>(default: T, supplier: F) -> T
where
    F: FnOnce() -> T,
{
    lazy_or_none(supplier).unwrap_or(default)
}

/// Runs an infallible `supplier`; a panic is replaced by `fallback()`.
pub fn lazy_or_else<T, F, G>(supplier: F, fallback: G) -> T
where
    F: FnOnce() -> T,
    G: FnOnce() -> T,
{
    lazy_or_none(supplier).unwrap_or_else(fallback)
}

/// Error type for blocks that can only fail by panicking.
#[derive(Debug)]
enum Never {}
