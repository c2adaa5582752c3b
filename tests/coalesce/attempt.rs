//! Integration tests for fault suppression

use std::cell::RefCell;

use nullguard_coalesce::{
    lazy_or_default, lazy_or_none, try_map, try_map_or_default, try_or_default,
    try_or_none, try_or_none_observed,
};
use nullguard_foundation::Fault;

// =============================================================================
// Returned Errors
// =============================================================================

#[test]
fn error_becomes_none() {
    assert_eq!(try_or_none(|| "12".parse::<i32>()), Some(12));
    assert_eq!(try_or_none(|| "x".parse::<i32>()), None);
    assert_eq!(try_or_default(0, || "x".parse::<i32>()), 0);
}

#[test]
fn fault_is_observed() {
    let seen = RefCell::new(None);
    let result = try_or_none_observed(|| Err::<i32, _>("bad"), |f| *seen.borrow_mut() = Some(f));
    assert_eq!(result, None);
    assert_eq!(*seen.borrow(), Some(Fault::Failed("bad")));
}

#[test]
fn try_map_over_absent_and_present() {
    assert_eq!(try_map(Some("7"), str::parse::<u8>), Some(7));
    assert_eq!(try_map(None, str::parse::<u8>), None);
    assert_eq!(try_map_or_default(Some("300"), 1, str::parse::<u8>), 1);
}

// =============================================================================
// Panics
// =============================================================================

#[test]
fn panic_becomes_none() {
    let values: Vec<i32> = Vec::new();
    assert_eq!(lazy_or_none(|| values[3]), None);
    assert_eq!(lazy_or_default(-1, || values[0]), -1);
}

#[test]
fn panic_is_reported_as_panicked() {
    let seen = RefCell::new(None);
    let result: Option<i32> = try_or_none_observed(
        || -> Result<i32, String> { panic!("boom") },
        |f| *seen.borrow_mut() = Some(f),
    );
    assert_eq!(result, None);
    let fault = seen.borrow_mut().take().unwrap();
    assert!(fault.is_panic());
    assert_eq!(fault, Fault::Panicked("boom".to_string()));
}
