//! Integration tests for splitting, lines, joining, indentation, and patterns

use nullguard_foundation::ErrorKind;
use nullguard_text::{
    DEFAULT_MARGIN, JoinOptions, find_all, indent, join_to_string, join_to_string_with,
    line_sequence, lines, matches_pattern, replace_all, split, split_pattern, split_regex,
    trim_indent, trim_margin,
};
use regex::Regex;

// =============================================================================
// Splitting
// =============================================================================

#[test]
fn split_with_limit() {
    assert_eq!(split(Some("a,b,c"), ',', 0), vec!["a", "b", "c"]);
    assert_eq!(split(Some("a,b,c"), ',', 2), vec!["a", "b,c"]);
    assert!(split(None, ',', 0).is_empty());
}

#[test]
fn split_on_patterns() {
    let ws = Regex::new(r"\s+").unwrap();
    assert_eq!(split_pattern(Some("a  b\tc"), &ws, 0), vec!["a", "b", "c"]);
    assert_eq!(split_regex(Some("1;2,3"), "[;,]", 0).unwrap(), vec!["1", "2", "3"]);
    let err = split_regex(Some("x"), "(", 0).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IllegalArgument(_)));
    assert_eq!(err.context.as_deref(), Some("split_regex"));
}

// =============================================================================
// Lines
// =============================================================================

#[test]
fn lines_handle_every_terminator() {
    assert_eq!(lines(Some("a\r\nb\nc\rd")), vec!["a", "b", "c", "d"]);
    assert_eq!(lines(Some("a\n")), vec!["a", ""]);
    assert_eq!(lines(Some("")), vec![""]);
    assert!(lines(None).is_empty());
}

#[test]
fn line_sequence_is_reusable() {
    let seq = line_sequence(Some("x\ny"));
    assert_eq!(seq.iter().count(), 2);
    let collected: Vec<&str> = seq.into_iter().collect();
    assert_eq!(collected, vec!["x", "y"]);
}

// =============================================================================
// Joining
// =============================================================================

#[test]
fn join_with_defaults() {
    assert_eq!(
        join_to_string(Some([1, 2, 3]), &JoinOptions::default()),
        "1, 2, 3"
    );
    assert_eq!(join_to_string(None::<Vec<i32>>, &JoinOptions::default()), "");
}

#[test]
fn join_with_limit_and_affixes() {
    let options = JoinOptions::separated_by("|")
        .with_prefix("[")
        .with_postfix("]")
        .with_limit(2);
    assert_eq!(join_to_string(Some(1..=5), &options), "[1|2|...]");
}

#[test]
fn join_with_custom_rendering() {
    let options = JoinOptions::separated_by(" ");
    let rendered = join_to_string_with(Some(["a", "b"]), &options, |item, out| {
        out.push_str(&item.to_uppercase());
    });
    assert_eq!(rendered, "A B");
}

// =============================================================================
// Indentation
// =============================================================================

#[test]
fn trim_indent_removes_common_margin() {
    let text = "\n    one\n      two\n    three\n";
    assert_eq!(trim_indent(Some(text)).as_deref(), Some("one\n  two\nthree"));
}

#[test]
fn trim_margin_and_indent() {
    let text = "\n    |alpha\n    |beta\n";
    let trimmed = trim_margin(Some(text), DEFAULT_MARGIN).unwrap();
    assert_eq!(trimmed.as_deref(), Some("alpha\nbeta"));
    assert_eq!(
        indent(trimmed.as_deref(), "> ").as_deref(),
        Some("> alpha\n> beta")
    );
    assert!(trim_margin(Some(text), " ").is_err());
}

// =============================================================================
// Compiled Patterns
// =============================================================================

#[test]
fn compiled_pattern_helpers() {
    let digits = Regex::new(r"\d+").unwrap();
    assert!(matches_pattern(Some("2024"), &digits));
    assert!(!matches_pattern(Some("v2024"), &digits));
    assert_eq!(find_all(Some("a1b22c333"), &digits), vec!["1", "22", "333"]);
    assert_eq!(
        replace_all(Some("a1b22"), &digits, "#").as_deref(),
        Some("a#b#")
    );
    assert_eq!(replace_all(None, &digits, "#"), None);
}
