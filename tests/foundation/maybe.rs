//! Integration tests for the Maybe wrapper
//!
//! Tests construction, extraction, and transformation chains.

use std::cell::Cell;

use nullguard_foundation::{ErrorKind, Maybe, wrap, wrap_if_present};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn wrap_present_and_absent() {
    assert!(wrap(Some(1)).is_present());
    assert!(wrap(None::<i32>).is_empty());
    assert_eq!(wrap_if_present(Some("x")), Maybe::Present("x"));
}

#[test]
fn default_is_empty() {
    assert_eq!(Maybe::<u8>::default(), Maybe::Empty);
}

#[test]
fn option_conversions() {
    let m: Maybe<i32> = Some(3).into();
    assert_eq!(m, Maybe::present(3));
    let back: Option<i32> = m.into();
    assert_eq!(back, Some(3));
    assert_eq!(Maybe::<i32>::empty().or_none(), None);
}

// =============================================================================
// Extraction
// =============================================================================

#[test]
fn map_then_get() {
    assert_eq!(wrap(Some(5)).map(|x| x * 2).get().unwrap(), 10);
}

#[test]
fn empty_map_or_else() {
    assert_eq!(wrap(None::<i32>).map(|x| x * 2).or_else(99), 99);
}

#[test]
fn get_on_empty_fails() {
    let err = wrap(None::<i32>).get().unwrap_err();
    assert_eq!(err.kind, ErrorKind::NoSuchElement);
}

#[test]
fn or_else_get_is_lazy() {
    let calls = Cell::new(0);
    let value = wrap(Some(1)).or_else_get(|| {
        calls.set(calls.get() + 1);
        0
    });
    assert_eq!(value, 1);
    assert_eq!(calls.get(), 0);
}

#[test]
fn or_else_err_uses_custom_error() {
    let result: Result<i32, &str> = Maybe::empty().or_else_err(|| "missing");
    assert_eq!(result, Err("missing"));
}

// =============================================================================
// Transformation
// =============================================================================

#[test]
fn flat_map_does_not_nest() {
    let parsed = wrap(Some("42")).flat_map(|s| wrap(s.parse::<i32>().ok()));
    assert_eq!(parsed, Maybe::Present(42));
    let bad = wrap(Some("x")).flat_map(|s| wrap(s.parse::<i32>().ok()));
    assert!(bad.is_empty());
}

#[test]
fn filter_drops_rejected_value() {
    assert_eq!(wrap(Some(4)).filter(|x| x % 2 == 0), Maybe::Present(4));
    assert_eq!(wrap(Some(3)).filter(|x| x % 2 == 0), Maybe::Empty);
}

#[test]
fn side_effects_run_on_matching_state() {
    let present = Cell::new(false);
    let empty = Cell::new(false);
    let _ = wrap(Some(1))
        .if_present(|_| present.set(true))
        .if_empty(|| empty.set(true));
    assert!(present.get());
    assert!(!empty.get());
}

#[test]
fn peek_sees_raw_contents() {
    let seen = Cell::new(None);
    let _ = wrap(Some(7)).peek(|v| seen.set(v.copied()));
    assert_eq!(seen.get(), Some(7));
    let _ = Maybe::<i32>::empty().peek(|v| seen.set(v.copied()));
    assert_eq!(seen.get(), None);
}

#[test]
fn fold_collapses_both_states() {
    let describe = |m: Maybe<i32>| m.fold(|| "none".to_string(), |v| format!("got {v}"));
    assert_eq!(describe(wrap(Some(2))), "got 2");
    assert_eq!(describe(Maybe::empty()), "none");
}

#[test]
fn present_none_differs_from_empty() {
    let nested: Maybe<Option<i32>> = Maybe::present(None);
    assert!(nested.is_present());
    assert_ne!(nested, Maybe::Empty);
}

#[test]
fn as_ref_leaves_original_usable() {
    let m = wrap(Some(String::from("abc")));
    assert_eq!(m.as_ref().map(String::len).get().unwrap(), 3);
    assert_eq!(m.get().unwrap(), "abc");
}
