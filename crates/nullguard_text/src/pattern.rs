//! Matching and replacing with a compiled [`Regex`].
//!
//! Replacement strings use the `regex` crate's syntax: `$1` or `${name}`
//! refer to capture groups and `$$` is a literal dollar sign.

use regex::Regex;

/// True if `pattern` matches the whole of `s`, not just a substring.
///
/// The check re-anchors the pattern's source text, so only inline flags such
/// as `(?i)` carry over; options set through `RegexBuilder` do not.
#[must_use]
pub fn matches_pattern(s: Option<&str>, pattern: &Regex) -> bool {
    let Some(s) = s else {
        return false;
    };
    Regex::new(&format!(r"\A(?:{})\z", pattern.as_str())).is_ok_and(|anchored| anchored.is_match(s))
}

/// The first matching substring.
#[must_use]
pub fn find_first<'a>(s: Option<&'a str>, pattern: &Regex) -> Option<&'a str> {
    pattern.find(s?).map(|m| m.as_str())
}

/// Every non-overlapping matching substring, in order.
#[must_use]
pub fn find_all<'a>(s: Option<&'a str>, pattern: &Regex) -> Vec<&'a str> {
    s.map(|s| pattern.find_iter(s).map(|m| m.as_str()).collect())
        .unwrap_or_default()
}

/// Replaces the first match with `replacement`.
#[must_use]
pub fn replace_first(s: Option<&str>, pattern: &Regex, replacement: &str) -> Option<String> {
    Some(pattern.replace(s?, replacement).into_owned())
}

/// Replaces every match with `replacement`.
#[must_use]
pub fn replace_all(s: Option<&str>, pattern: &Regex, replacement: &str) -> Option<String> {
    Some(pattern.replace_all(s?, replacement).into_owned())
}
