//! Boolean checks over possibly-absent text.
//!
//! An absent input never matches a positive check: `starts_with(None, ..)`,
//! `is_numeric(None)` and friends are `false`. The emptiness checks treat
//! absent as empty.

use std::cmp::Ordering;
use std::sync::LazyLock;

use nullguard_coalesce::{is_null_or_blank, is_null_or_empty};
use regex::Regex;

use crate::chars::{char_len, eq_ignore_case};

static LETTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\A\p{L}*\z").unwrap());
static DECIMAL_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\A\p{Nd}*\z").unwrap());
static LETTERS_OR_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[\p{L}\p{Nd}]*\z").unwrap());

/// True if `s` is absent or has no chars.
#[must_use]
pub fn is_empty(s: Option<&str>) -> bool {
    is_null_or_empty(s)
}

/// True if `s` is present and has at least one char.
#[must_use]
pub fn is_not_empty(s: Option<&str>) -> bool {
    !is_empty(s)
}

/// True if `s` is absent or contains only whitespace.
#[must_use]
pub fn is_blank(s: Option<&str>) -> bool {
    is_null_or_blank(s)
}

/// True if `s` is present and contains a non-whitespace char.
#[must_use]
pub fn is_not_blank(s: Option<&str>) -> bool {
    !is_blank(s)
}

fn starts_with_chars(s: &str, prefix: &str, ignore_case: bool) -> bool {
    if !ignore_case {
        return s.starts_with(prefix);
    }
    let mut chars = s.chars();
    prefix
        .chars()
        .all(|p| chars.next().is_some_and(|c| eq_ignore_case(c, p)))
}

/// True if `s` begins with `prefix`.
#[must_use]
pub fn starts_with(s: Option<&str>, prefix: &str, ignore_case: bool) -> bool {
    s.is_some_and(|s| starts_with_chars(s, prefix, ignore_case))
}

/// True if `s` ends with `suffix`.
#[must_use]
pub fn ends_with(s: Option<&str>, suffix: &str, ignore_case: bool) -> bool {
    s.is_some_and(|s| {
        if !ignore_case {
            return s.ends_with(suffix);
        }
        let mut chars = s.chars().rev();
        suffix
            .chars()
            .rev()
            .all(|p| chars.next().is_some_and(|c| eq_ignore_case(c, p)))
    })
}

/// True if `s` contains the char `needle`.
#[must_use]
pub fn contains_char(s: Option<&str>, needle: char, ignore_case: bool) -> bool {
    s.is_some_and(|s| {
        if ignore_case {
            s.chars().any(|c| eq_ignore_case(c, needle))
        } else {
            s.contains(needle)
        }
    })
}

/// True if `s` contains `needle`. The empty needle is contained in every
/// present string.
#[must_use]
pub fn contains(s: Option<&str>, needle: &str, ignore_case: bool) -> bool {
    s.is_some_and(|s| {
        if !ignore_case {
            return s.contains(needle);
        }
        s.char_indices()
            .map(|(i, _)| &s[i..])
            .chain(std::iter::once(""))
            .any(|rest| starts_with_chars(rest, needle, true))
    })
}

/// True if the whole of `s` matches the regular expression `pattern`.
///
/// An invalid pattern matches nothing.
#[must_use]
pub fn matches(s: Option<&str>, pattern: &str) -> bool {
    let Some(s) = s else {
        return false;
    };
    Regex::new(&format!(r"\A(?:{pattern})\z")).is_ok_and(|re| re.is_match(s))
}

/// True if the char length of `s` lies in `[min, max]`; absent counts as
/// length 0.
#[must_use]
pub fn has_length(s: Option<&str>, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.map_or(0, char_len))
}

/// True if every char of a present `s` is a letter or a decimal digit.
#[must_use]
pub fn is_alphanumeric(s: Option<&str>) -> bool {
    s.is_some_and(|s| LETTERS_OR_DIGITS.is_match(s))
}

/// True if every char of a present `s` is a decimal digit (`Nd`).
///
/// Fractions and numeral letters such as `½` or `Ⅷ` do not count.
#[must_use]
pub fn is_numeric(s: Option<&str>) -> bool {
    s.is_some_and(|s| DECIMAL_DIGITS.is_match(s))
}

/// True if every char of a present `s` is a letter.
#[must_use]
pub fn is_alpha(s: Option<&str>) -> bool {
    s.is_some_and(|s| LETTERS.is_match(s))
}

/// Equality where two absent values are equal and absent differs from
/// every present value.
#[must_use]
pub fn equals(a: Option<&str>, b: Option<&str>, ignore_case: bool) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) if ignore_case => {
            char_len(a) == char_len(b) && a.chars().zip(b.chars()).all(|(x, y)| eq_ignore_case(x, y))
        }
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Lexicographic comparison by char, with absent ordered first.
#[must_use]
pub fn compare(a: Option<&str>, b: Option<&str>, ignore_case: bool) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) if ignore_case => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase)),
        (Some(a), Some(b)) => a.cmp(b),
    }
}
