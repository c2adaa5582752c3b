//! Integration tests for bounded extraction and cleanup

use nullguard_text::{
    collapse_whitespace, drop, remove_prefix, remove_surrounding, replace, substring_after,
    substring_after_last, substring_before, substring_between, take, take_last, take_while,
};

// =============================================================================
// Bounded Extraction
// =============================================================================

#[test]
fn take_counts_chars() {
    assert_eq!(take(Some("héllo"), 2), "hé");
    assert_eq!(take(Some("abc"), 10), "abc");
    assert_eq!(take(Some("abc"), -1), "");
    assert_eq!(take(None, 3), "");
    assert_eq!(take_last(Some("abcdef"), 2), "ef");
}

#[test]
fn drop_keeps_absence() {
    assert_eq!(drop(Some("abcdef"), 4).as_deref(), Some("ef"));
    assert_eq!(drop(Some("abc"), 10).as_deref(), Some(""));
    assert_eq!(drop(None, 1), None);
}

#[test]
fn take_while_digits() {
    assert_eq!(
        take_while(Some("123abc"), |c| c.is_ascii_digit()).as_deref(),
        Some("123")
    );
}

// =============================================================================
// Delimiter Extraction
// =============================================================================

#[test]
fn substrings_around_delimiter() {
    let path = Some("dir/sub/file.txt");
    assert_eq!(substring_before(path, '/', None), "dir");
    assert_eq!(substring_after(path, '/', None), "sub/file.txt");
    assert_eq!(substring_after_last(path, '/', None), "file.txt");
}

#[test]
fn missing_delimiter_uses_fallback() {
    assert_eq!(substring_before(Some("abc"), ':', Some("none")), "none");
    assert_eq!(substring_after(Some("abc"), ':', None), "abc");
    assert_eq!(substring_after(None, ':', None), "");
}

#[test]
fn between_markers() {
    assert_eq!(substring_between(Some("f(x, y)"), "(", ")"), Some("x, y"));
    assert_eq!(substring_between(Some("f x"), "(", ")"), None);
    assert_eq!(substring_between(None, "(", ")"), None);
}

// =============================================================================
// Cleanup
// =============================================================================

#[test]
fn replace_ignoring_case() {
    assert_eq!(
        replace(Some("Cat cat CAT"), "cat", "dog", true).as_deref(),
        Some("dog dog dog")
    );
    assert_eq!(
        replace(Some("a.b.c"), ".", "$", false).as_deref(),
        Some("a$b$c")
    );
    assert_eq!(replace(None, "a", "b", false), None);
}

#[test]
fn affix_removal() {
    assert_eq!(remove_prefix(Some("v1.2"), "v"), Some("1.2"));
    assert_eq!(remove_prefix(Some("1.2"), "v"), Some("1.2"));
    assert_eq!(remove_surrounding(Some("\"quoted\""), "\"", "\""), Some("quoted"));
    assert_eq!(remove_surrounding(Some("\"open"), "\"", "\""), Some("\"open"));
}

#[test]
fn whitespace_collapses() {
    assert_eq!(
        collapse_whitespace(Some("  a \t b\n\nc ")).as_deref(),
        Some("a b c")
    );
}
