//! Padding and centering to a target char length.

use crate::chars::char_len;

fn fill(pad: char, n: usize) -> String {
    std::iter::repeat_n(pad, n).collect()
}

/// Prepends `pad` until `s` is `length` chars long.
#[must_use]
pub fn pad_start(s: Option<&str>, length: usize, pad: char) -> Option<String> {
    let s = s?;
    let mut out = fill(pad, length.saturating_sub(char_len(s)));
    out.push_str(s);
    Some(out)
}

/// Appends `pad` until `s` is `length` chars long.
#[must_use]
pub fn pad_end(s: Option<&str>, length: usize, pad: char) -> Option<String> {
    let s = s?;
    let mut out = s.to_string();
    out.push_str(&fill(pad, length.saturating_sub(char_len(s))));
    Some(out)
}

/// Pads both sides to `length` chars; an odd remainder goes on the right.
#[must_use]
pub fn center(s: Option<&str>, length: usize, pad: char) -> Option<String> {
    let s = s?;
    let padding = length.saturating_sub(char_len(s));
    let left = padding / 2;
    let mut out = fill(pad, left);
    out.push_str(s);
    out.push_str(&fill(pad, padding - left));
    Some(out)
}
