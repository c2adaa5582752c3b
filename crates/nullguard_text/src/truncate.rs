//! Length-limited rendering with an ellipsis marker.
//!
//! Absent input yields `Ok(None)` whatever the limit. For present input a
//! negative limit is a caller error.

use nullguard_foundation::{Error, Result};

use crate::chars::{char_len, prefix, suffix};

/// Default marker appended by [`truncate`] and [`ellipsize_middle`].
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Single-char marker used by [`ellipsize`].
pub const ELLIPSIS_CHAR: char = '\u{2026}';

fn checked_length(parameter: &'static str, value: i64) -> Result<usize> {
    if value < 0 {
        return Err(Error::negative_length(parameter, value));
    }
    Ok(usize::try_from(value).unwrap_or(usize::MAX))
}

/// Cuts `s` to at most `max_length` chars, ending in `ellipsis` when cut.
///
/// If `max_length` leaves no room for any original text, the result is the
/// first `max_length` chars of the marker itself.
///
/// # Errors
///
/// Returns a `NegativeLength` error if `s` is present and `max_length` is
/// negative.
pub fn truncate(s: Option<&str>, max_length: i64, ellipsis: &str) -> Result<Option<String>> {
    let Some(s) = s else {
        return Ok(None);
    };
    let max = checked_length("maxLength", max_length)?;
    if char_len(s) <= max {
        return Ok(Some(s.to_string()));
    }
    let marker_len = char_len(ellipsis);
    if max <= marker_len {
        return Ok(Some(prefix(ellipsis, max).to_string()));
    }
    Ok(Some(format!("{}{ellipsis}", prefix(s, max - marker_len))))
}

/// Cuts `s` to at most `max_chars` chars, ending in `…` when cut.
///
/// A limit of 0 or 1 yields the lone `…`.
///
/// # Errors
///
/// Returns a `NegativeLength` error if `s` is present and `max_chars` is
/// negative.
pub fn ellipsize(s: Option<&str>, max_chars: i64) -> Result<Option<String>> {
    let Some(s) = s else {
        return Ok(None);
    };
    let max = checked_length("maxChars", max_chars)?;
    if char_len(s) <= max {
        return Ok(Some(s.to_string()));
    }
    if max <= 1 {
        return Ok(Some(ELLIPSIS_CHAR.to_string()));
    }
    Ok(Some(format!("{}{ELLIPSIS_CHAR}", prefix(s, max - 1))))
}

/// Cuts chars out of the middle of `s`, keeping both ends.
///
/// The kept budget is split between the two ends with any odd char going
/// to the left-hand end.
///
/// # Errors
///
/// Returns a `NegativeLength` error if `s` is present and `max_chars` is
/// negative.
pub fn ellipsize_middle(s: Option<&str>, max_chars: i64, ellipsis: &str) -> Result<Option<String>> {
    let Some(s) = s else {
        return Ok(None);
    };
    let max = checked_length("maxChars", max_chars)?;
    if char_len(s) <= max {
        return Ok(Some(s.to_string()));
    }
    let marker_len = char_len(ellipsis);
    if max <= marker_len {
        return Ok(Some(prefix(ellipsis, max).to_string()));
    }
    let keep = max - marker_len;
    let right = keep / 2;
    let left = keep - right;
    Ok(Some(format!("{}{ellipsis}{}", prefix(s, left), suffix(s, right))))
}
