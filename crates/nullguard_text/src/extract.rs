//! Bounded and delimiter-based extraction.
//!
//! Counts are in chars and are clamped to the text length. A negative count
//! takes nothing and drops nothing.

use crate::chars::{char_len, non_negative, prefix, suffix};

/// The first `n` chars; empty for an absent input or `n <= 0`.
#[must_use]
pub fn take(s: Option<&str>, n: isize) -> String {
    s.map_or_else(String::new, |s| prefix(s, non_negative(n)).to_string())
}

/// The last `n` chars; empty for an absent input or `n <= 0`.
#[must_use]
pub fn take_last(s: Option<&str>, n: isize) -> String {
    s.map_or_else(String::new, |s| suffix(s, non_negative(n)).to_string())
}

/// Everything after the first `n` chars.
#[must_use]
pub fn drop(s: Option<&str>, n: isize) -> Option<String> {
    let s = s?;
    let keep = char_len(s).saturating_sub(non_negative(n));
    Some(suffix(s, keep).to_string())
}

/// Everything before the last `n` chars.
#[must_use]
pub fn drop_last(s: Option<&str>, n: isize) -> Option<String> {
    let s = s?;
    let keep = char_len(s).saturating_sub(non_negative(n));
    Some(prefix(s, keep).to_string())
}

/// The longest prefix whose chars all match `predicate`.
pub fn take_while<P>(s: Option<&str>, mut predicate: P) -> Option<String>
where
    P: FnMut(char) -> bool,
{
    Some(s?.chars().take_while(|c| predicate(*c)).collect())
}

/// Everything after the longest prefix matching `predicate`.
pub fn drop_while<P>(s: Option<&str>, mut predicate: P) -> Option<String>
where
    P: FnMut(char) -> bool,
{
    Some(s?.chars().skip_while(|c| predicate(*c)).collect())
}

/// Resolves the value returned when a delimiter is missing: the explicit
/// fallback if given, otherwise the input itself (or empty when absent).
fn missing_value(s: Option<&str>, missing: Option<&str>) -> String {
    missing.or(s).unwrap_or_default().to_string()
}

/// The text before the first `delimiter`.
#[must_use]
pub fn substring_before(s: Option<&str>, delimiter: char, missing: Option<&str>) -> String {
    s.and_then(|t| t.split_once(delimiter))
        .map_or_else(|| missing_value(s, missing), |(before, _)| before.to_string())
}

/// The text before the last `delimiter`.
#[must_use]
pub fn substring_before_last(s: Option<&str>, delimiter: char, missing: Option<&str>) -> String {
    s.and_then(|t| t.rsplit_once(delimiter))
        .map_or_else(|| missing_value(s, missing), |(before, _)| before.to_string())
}

/// The text after the first `delimiter`.
#[must_use]
pub fn substring_after(s: Option<&str>, delimiter: char, missing: Option<&str>) -> String {
    s.and_then(|t| t.split_once(delimiter))
        .map_or_else(|| missing_value(s, missing), |(_, after)| after.to_string())
}

/// The text after the last `delimiter`.
#[must_use]
pub fn substring_after_last(s: Option<&str>, delimiter: char, missing: Option<&str>) -> String {
    s.and_then(|t| t.rsplit_once(delimiter))
        .map_or_else(|| missing_value(s, missing), |(_, after)| after.to_string())
}

/// The text between the first `open` and the next `close` after it.
///
/// Returns `None` if either delimiter is missing or `close` only occurs
/// before `open`.
#[must_use]
pub fn substring_between<'a>(s: Option<&'a str>, open: &str, close: &str) -> Option<&'a str> {
    let s = s?;
    let start = s.find(open)? + open.len();
    let end = s[start..].find(close)? + start;
    Some(&s[start..end])
}
