//! Integration tests for null-safe logic and arithmetic

use nullguard_coalesce::{
    null_safe_all, null_safe_and, null_safe_any, null_safe_divide, null_safe_minus,
    null_safe_multiply, null_safe_not, null_safe_or, null_safe_plus,
};

// =============================================================================
// Arithmetic
// =============================================================================

#[test]
fn divide_by_zero_is_absent() {
    assert_eq!(null_safe_divide(Some(10), Some(0)), None);
    assert_eq!(null_safe_divide(Some(10), Some(2)), Some(5));
    assert_eq!(null_safe_divide(Some(1.0_f64), Some(0.0)), None);
    assert_eq!(null_safe_divide(Some(1.0_f64), Some(-0.0)), None);
}

#[test]
fn absent_operand_is_absent() {
    assert_eq!(null_safe_plus(Some(1), None), None);
    assert_eq!(null_safe_minus(None, Some(1)), None);
    assert_eq!(null_safe_multiply::<i64>(None, None), None);
}

#[test]
fn integer_overflow_wraps() {
    assert_eq!(null_safe_plus(Some(i32::MAX), Some(1)), Some(i32::MIN));
    assert_eq!(null_safe_divide(Some(i32::MIN), Some(-1)), Some(i32::MIN));
    assert_eq!(null_safe_minus(Some(0_u8), Some(1)), Some(255));
}

// =============================================================================
// Boolean Logic
// =============================================================================

#[test]
fn boolean_logic_propagates_absence() {
    assert_eq!(null_safe_and(Some(true), Some(false)), Some(false));
    assert_eq!(null_safe_and(Some(false), None), None);
    assert_eq!(null_safe_or(Some(true), None), None);
    assert_eq!(null_safe_not(Some(true)), Some(false));
    assert_eq!(null_safe_not(None), None);
}

#[test]
fn aggregate_flags() {
    assert_eq!(null_safe_all(&[Some(true), Some(true)]), Some(true));
    assert_eq!(null_safe_all(&[Some(true), None]), None);
    assert_eq!(null_safe_any(&[Some(false), Some(true)]), Some(true));
    assert_eq!(null_safe_all(&[]), Some(true));
    assert_eq!(null_safe_any(&[]), Some(false));
}
