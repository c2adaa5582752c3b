//! Identifier and URL case styles.

use std::sync::LazyLock;

use regex::Regex;

use crate::trim::capitalize;

static SLUG_DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());
static WORD_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[_\s-]+").unwrap());
static LOWER_UPPER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static SPACE_OR_HYPHEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s-]").unwrap());
static SPACE_OR_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_]").unwrap());

/// URL slug: lowercase ASCII letters, digits and single hyphens.
///
/// Other chars are dropped, whitespace runs become one hyphen, and runs of
/// hyphens collapse.
#[must_use]
pub fn to_slug(s: Option<&str>) -> Option<String> {
    let lower = s?.to_lowercase();
    let kept = SLUG_DISALLOWED.replace_all(&lower, "");
    let hyphenated = WHITESPACE_RUN.replace_all(kept.trim(), "-");
    Some(HYPHEN_RUN.replace_all(&hyphenated, "-").into_owned())
}

/// `camelCase`: splits on runs of `_`, whitespace or `-`, lowercases the
/// first word and uppercases the first char of each later word.
#[must_use]
pub fn to_camel_case(s: Option<&str>) -> Option<String> {
    let s = s?;
    let mut out = String::with_capacity(s.len());
    for (i, word) in WORD_SEPARATORS
        .split(s)
        .filter(|w| !w.is_empty())
        .enumerate()
    {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    Some(out)
}

/// `snake_case`: separates lower-to-upper boundaries, turns whitespace and
/// hyphens into underscores, then lowercases.
#[must_use]
pub fn to_snake_case(s: Option<&str>) -> Option<String> {
    let split = LOWER_UPPER.replace_all(s?, "${1}_${2}");
    Some(SPACE_OR_HYPHEN.replace_all(&split, "_").to_lowercase())
}

/// `kebab-case`: separates lower-to-upper boundaries, turns whitespace and
/// underscores into hyphens, then lowercases.
#[must_use]
pub fn to_kebab_case(s: Option<&str>) -> Option<String> {
    let split = LOWER_UPPER.replace_all(s?, "${1}-${2}");
    Some(SPACE_OR_UNDERSCORE.replace_all(&split, "-").to_lowercase())
}

/// Title Case: each whitespace-separated word capitalized with the rest
/// lowercased, joined by single spaces.
#[must_use]
pub fn to_title_case(s: Option<&str>) -> Option<String> {
    let s = s?;
    if s.is_empty() {
        return Some(String::new());
    }
    let words: Vec<String> = WHITESPACE_RUN
        .split(s)
        .map(|w| capitalize(Some(w)).unwrap_or_default())
        .collect();
    Some(words.join(" "))
}
