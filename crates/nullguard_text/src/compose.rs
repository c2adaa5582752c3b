//! Fallbacks, repetition, and appending.

use crate::chars::non_negative;

pub use nullguard_coalesce::or_empty;

/// The text, or `default` if absent.
#[must_use]
pub fn or_default<'a>(s: Option<&'a str>, default: &'a str) -> &'a str {
    s.unwrap_or(default)
}

/// `s` repeated `times` times; empty if absent or `times <= 0`.
#[must_use]
pub fn repeat(s: Option<&str>, times: isize) -> String {
    s.map_or_else(String::new, |s| s.repeat(non_negative(times)))
}

/// `c` repeated `times` times; empty if `times <= 0`.
#[must_use]
pub fn repeat_char(c: char, times: isize) -> String {
    std::iter::repeat_n(c, non_negative(times)).collect()
}

/// Appends `s` to `builder`, starting a new buffer if there is none.
#[must_use]
pub fn append_to(builder: Option<String>, s: Option<&str>) -> String {
    let mut out = builder.unwrap_or_default();
    if let Some(s) = s {
        out.push_str(s);
    }
    out
}
