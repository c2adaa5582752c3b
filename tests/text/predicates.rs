//! Integration tests for text predicates, trimming, and case

use std::cmp::Ordering;

use nullguard_text::{
    capitalize, compare, contains, decapitalize, ends_with, equals, has_length, is_alpha,
    is_blank, is_empty, is_not_blank, is_numeric, matches, starts_with, to_upper_case, trim,
    trim_to_null,
};

// =============================================================================
// Predicates
// =============================================================================

#[test]
fn absent_text_is_empty_and_blank() {
    assert!(is_empty(None));
    assert!(is_blank(None));
    assert!(is_blank(Some(" \n\t")));
    assert!(!is_not_blank(Some("   ")));
    assert!(is_not_blank(Some(" a ")));
}

#[test]
fn affix_checks_ignore_case() {
    assert!(starts_with(Some("Hello"), "he", true));
    assert!(!starts_with(Some("Hello"), "he", false));
    assert!(ends_with(Some("README.MD"), ".md", true));
    assert!(contains(Some("Null Guard"), "GUARD", true));
    assert!(!contains(None, "", false));
}

#[test]
fn anchored_regex_match() {
    assert!(matches(Some("abc123"), "[a-z]+[0-9]+"));
    assert!(!matches(Some("abc123x"), "[a-z]+[0-9]+"));
    assert!(!matches(Some("abc"), "(unclosed"));
    assert!(!matches(None, ".*"));
}

#[test]
fn character_classes() {
    assert!(is_numeric(Some("0123")));
    assert!(!is_numeric(Some("12a")));
    assert!(!is_numeric(Some("3½")));
    assert!(is_alpha(Some("héllo")));
    assert!(!is_numeric(None));
    assert!(has_length(Some("abc"), 1, 3));
    assert!(has_length(None, 0, 0));
}

#[test]
fn equality_and_ordering() {
    assert!(equals(None, None, false));
    assert!(equals(Some("ABC"), Some("abc"), true));
    assert!(!equals(Some("a"), None, true));
    assert_eq!(compare(None, Some("a"), false), Ordering::Less);
    assert_eq!(compare(Some("B"), Some("a"), true), Ordering::Greater);
    assert_eq!(compare(Some("B"), Some("a"), false), Ordering::Less);
}

// =============================================================================
// Trimming and Case
// =============================================================================

#[test]
fn trimming() {
    assert_eq!(trim(Some("  x  ")), Some("x"));
    assert_eq!(trim(None), None);
    assert_eq!(trim_to_null(Some("   ")), None);
    assert_eq!(trim_to_null(Some(" y ")), Some("y"));
}

#[test]
fn case_changes() {
    assert_eq!(to_upper_case(Some("abc")).as_deref(), Some("ABC"));
    assert_eq!(capitalize(Some("hELLO")).as_deref(), Some("Hello"));
    assert_eq!(decapitalize(Some("Hello")).as_deref(), Some("hello"));
    assert_eq!(capitalize(None), None);
}
