//! Integration tests for presence checks, casts, and clamping

use std::any::Any;

use nullguard_coalesce::{
    cast_or_default, check_not_null, coerce_at_least, coerce_at_most, coerce_in, is_null_or_blank,
    is_null_or_empty, require_cast, require_not_null, require_not_null_with, safe_cast,
};
use nullguard_foundation::{ErrorCategory, ErrorKind};

// =============================================================================
// Presence
// =============================================================================

#[test]
fn emptiness_checks() {
    assert!(is_null_or_empty::<str>(None));
    assert!(is_null_or_empty(Some("")));
    assert!(is_null_or_empty(Some(&Vec::<i32>::new())));
    assert!(!is_null_or_empty(Some(&vec![1])));
    assert!(is_null_or_blank(Some(" \t")));
    assert!(!is_null_or_blank(Some(" x ")));
}

#[test]
fn require_is_caller_error() {
    let err = require_not_null::<i32>(None).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IllegalArgument(_)));
    assert_eq!(err.category(), ErrorCategory::CallerError);
    assert!(format!("{err}").contains("Required value was null"));
    assert_eq!(require_not_null(Some(3)).unwrap(), 3);
}

#[test]
fn require_with_custom_message() {
    let err = require_not_null_with::<i32>(None, "user id missing").unwrap_err();
    assert!(format!("{err}").contains("user id missing"));
}

#[test]
fn check_is_state_invariant() {
    let err = check_not_null::<i32>(None).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IllegalState(_)));
    assert_eq!(err.category(), ErrorCategory::StateInvariant);
}

// =============================================================================
// Casts
// =============================================================================

#[test]
fn casts_narrow_by_type() {
    let value: &dyn Any = &5_i32;
    assert_eq!(safe_cast::<i32>(Some(value)), Some(&5));
    assert_eq!(safe_cast::<String>(Some(value)), None);
    assert_eq!(cast_or_default(Some(value), String::from("n/a")), "n/a");
    let err = require_cast::<String>(Some(value)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidCast { .. }));
}

// =============================================================================
// Clamping
// =============================================================================

#[test]
fn clamping() {
    assert_eq!(coerce_in(15, 0, 10).unwrap(), 10);
    assert_eq!(coerce_in(-3, 0, 10).unwrap(), 0);
    assert_eq!(coerce_at_least(2, 5), 5);
    assert_eq!(coerce_at_most(2, 5), 2);
    let err = coerce_in(1, 10, 0).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidBounds { .. }));
}
