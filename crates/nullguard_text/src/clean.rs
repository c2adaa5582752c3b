//! Replacement and whitespace cleanup.

use std::sync::LazyLock;

use regex::{NoExpand, Regex, RegexBuilder};

use crate::chars::eq_ignore_case;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Replaces every occurrence of the char `old` with `new`.
#[must_use]
pub fn replace_char(s: Option<&str>, old: char, new: char, ignore_case: bool) -> Option<String> {
    let s = s?;
    Some(
        s.chars()
            .map(|c| {
                let hit = if ignore_case {
                    eq_ignore_case(c, old)
                } else {
                    c == old
                };
                if hit { new } else { c }
            })
            .collect(),
    )
}

/// Replaces every occurrence of `old` with `new`, taken literally.
#[must_use]
pub fn replace(s: Option<&str>, old: &str, new: &str, ignore_case: bool) -> Option<String> {
    let s = s?;
    if !ignore_case {
        return Some(s.replace(old, new));
    }
    match RegexBuilder::new(&regex::escape(old))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => Some(re.replace_all(s, NoExpand(new)).into_owned()),
        Err(err) => {
            tracing::trace!(target: "nullguard::text", %err, "case-insensitive pattern rejected");
            Some(s.to_string())
        }
    }
}

/// Strips `prefix` from the start if present.
#[must_use]
pub fn remove_prefix<'a>(s: Option<&'a str>, prefix: &str) -> Option<&'a str> {
    s.map(|s| s.strip_prefix(prefix).unwrap_or(s))
}

/// Strips `suffix` from the end if present.
#[must_use]
pub fn remove_suffix<'a>(s: Option<&'a str>, suffix: &str) -> Option<&'a str> {
    s.map(|s| s.strip_suffix(suffix).unwrap_or(s))
}

/// Strips `prefix` and `suffix` only when both are present and do not
/// overlap.
#[must_use]
pub fn remove_surrounding<'a>(s: Option<&'a str>, prefix: &str, suffix: &str) -> Option<&'a str> {
    s.map(|s| {
        s.strip_prefix(prefix)
            .and_then(|rest| rest.strip_suffix(suffix))
            .unwrap_or(s)
    })
}

/// Removes every whitespace char.
#[must_use]
pub fn remove_whitespace(s: Option<&str>) -> Option<String> {
    s.map(|s| s.chars().filter(|c| !c.is_whitespace()).collect())
}

/// Trims, then collapses each interior whitespace run to one space.
#[must_use]
pub fn collapse_whitespace(s: Option<&str>) -> Option<String> {
    s.map(|s| WHITESPACE_RUN.replace_all(s.trim(), " ").into_owned())
}
