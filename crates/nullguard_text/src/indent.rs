//! Indentation of multi-line text.
//!
//! Lines are split with the same terminators as [`crate::lines`] and joined
//! back with `\n`.

use nullguard_foundation::{Error, Result};

use crate::chars::{char_len, prefix};
use crate::split::lines;

/// Indent used by [`indent`] when none is given.
pub const DEFAULT_INDENT: &str = "    ";

/// Margin prefix used by [`trim_margin`] when none is given.
pub const DEFAULT_MARGIN: &str = "|";

fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Drops a blank first and a blank last line, keeping the rest.
fn strip_blank_ends<'a>(all: &[&'a str]) -> Vec<&'a str> {
    let last = all.len().saturating_sub(1);
    all.iter()
        .enumerate()
        .filter(|&(i, line)| !((i == 0 || i == last) && is_blank(line)))
        .map(|(_, line)| *line)
        .collect()
}

/// Prefixes every line with `indent`.
///
/// A blank line shorter than `indent` is replaced by `indent` itself; a
/// longer blank line is kept as is.
#[must_use]
pub fn indent(s: Option<&str>, indent: &str) -> Option<String> {
    let indent_len = char_len(indent);
    let out: Vec<String> = lines(Some(s?))
        .into_iter()
        .map(|line| {
            if !is_blank(line) {
                format!("{indent}{line}")
            } else if char_len(line) < indent_len {
                indent.to_string()
            } else {
                line.to_string()
            }
        })
        .collect();
    Some(out.join("\n"))
}

/// Removes the indentation shared by every non-blank line, and a blank
/// first or last line.
#[must_use]
pub fn trim_indent(s: Option<&str>) -> Option<String> {
    let all = lines(Some(s?));
    let common = all
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| leading_whitespace(line))
        .min()
        .unwrap_or(0);
    let out: Vec<&str> = strip_blank_ends(&all)
        .into_iter()
        .map(|line| &line[prefix(line, common).len()..])
        .collect();
    Some(out.join("\n"))
}

/// Strips leading whitespace followed by `margin` from each line, and a
/// blank first or last line. Lines without the margin are kept unchanged.
///
/// # Errors
///
/// Returns an `IllegalArgument` error if `margin` is blank.
pub fn trim_margin(s: Option<&str>, margin: &str) -> Result<Option<String>> {
    if is_blank(margin) {
        return Err(Error::illegal_argument("marginPrefix must be non-blank string.")
            .with_context("trim_margin"));
    }
    let Some(s) = s else {
        return Ok(None);
    };
    let out: Vec<&str> = strip_blank_ends(&lines(Some(s)))
        .into_iter()
        .map(|line| {
            let body = line.trim_start();
            body.strip_prefix(margin).unwrap_or(line)
        })
        .collect();
    Ok(Some(out.join("\n")))
}
