//! Null-coalescing primitives.
//!
//! This crate answers two questions about a possibly-absent value: "is it
//! absent (or empty, or blank)?" and "what do I substitute when it is?".
//! Functions are organized by category:
//! - Presence checks and require/check assertions ([`presence`])
//! - Fallbacks and safe calls ([`fallback`])
//! - First-present selection ([`coalesce()`], [`coalesce!`])
//! - All-or-nothing combinators ([`combine`])
//! - Null-safe logic and arithmetic ([`arithmetic`])
//! - Clamping ([`bounds`])
//! - Runtime type narrowing ([`cast`])
//! - Fault suppression ([`attempt`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod attempt;
pub mod bounds;
pub mod cast;
pub mod coalesce;
pub mod combine;
pub mod fallback;
pub mod presence;

pub use arithmetic::{
    NullSafeNumber, null_safe_all, null_safe_and, null_safe_any, null_safe_divide,
    null_safe_minus, null_safe_multiply, null_safe_not, null_safe_or, null_safe_plus,
};
pub use attempt::{
    lazy_or_default, lazy_or_else, lazy_or_none, try_map, try_map_or_default, try_or_default,
    try_or_default_observed, try_or_else, try_or_none, try_or_none_observed,
};
pub use bounds::{coerce_at_least, coerce_at_most, coerce_in};
pub use cast::{cast_or_default, cast_or_else, require_cast, safe_cast, safe_cast_boxed};
pub use coalesce::{coalesce, coalesce_or_default, coalesce_or_else};
pub use combine::{let2, let2_or, let3, let3_or, let4, let5};
pub use fallback::{
    if_not_null, if_not_null_else, if_not_null_else_map, if_null, let_or_default,
    let_or_else_get, let_or_else_throw, or_default_value, or_else_get, or_else_nullable,
    or_else_throw, or_else_value, or_empty, or_true, safe_also, safe_compare, safe_equals,
    safe_let, take_if, take_if_in_range, take_if_not_blank, take_if_not_empty, take_unless,
    to_display_string, to_string_or_default, to_string_or_empty,
};
pub use presence::{
    check_not_null, check_not_null_else, check_not_null_with, is_absent, is_null_or_blank,
    is_null_or_empty, is_present, require_not_null, require_not_null_else, require_not_null_with,
};
