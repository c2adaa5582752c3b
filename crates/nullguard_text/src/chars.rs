//! Character-indexed slicing helpers.
//!
//! Text lengths and positions in this crate count `char`s, not bytes.

/// Number of chars in `s`.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the char at position `n`, or `s.len()` past the end.
pub(crate) fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// The first `n` chars of `s`.
pub(crate) fn prefix(s: &str, n: usize) -> &str {
    &s[..byte_offset(s, n)]
}

/// The last `n` chars of `s`.
pub(crate) fn suffix(s: &str, n: usize) -> &str {
    let skip = char_len(s).saturating_sub(n);
    &s[byte_offset(s, skip)..]
}

/// Converts a signed count to `usize`, treating negatives as zero.
pub(crate) fn non_negative(n: isize) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// Case-insensitive char equality, matching if either the upper- or the
/// lowercase forms agree.
pub(crate) fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase()) || a.to_lowercase().eq(b.to_lowercase())
}
