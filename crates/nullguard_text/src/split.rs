//! Splitting, line iteration, and joining.

use std::fmt::{Display, Write as _};

use nullguard_foundation::{Error, Result};
use regex::Regex;

// =============================================================================
// Splitting
// =============================================================================

/// Splits on `delimiter`; a `limit` above 0 caps the number of pieces, with
/// the last piece holding the unsplit remainder. Absent input yields no
/// pieces.
#[must_use]
pub fn split(s: Option<&str>, delimiter: char, limit: usize) -> Vec<String> {
    let Some(s) = s else {
        return Vec::new();
    };
    if limit == 0 {
        s.split(delimiter).map(str::to_string).collect()
    } else {
        s.splitn(limit, delimiter).map(str::to_string).collect()
    }
}

/// Splits on matches of a compiled pattern, with the same `limit` rule as
/// [`split`].
#[must_use]
pub fn split_pattern(s: Option<&str>, pattern: &Regex, limit: usize) -> Vec<String> {
    let Some(s) = s else {
        return Vec::new();
    };
    if limit == 0 {
        pattern.split(s).map(str::to_string).collect()
    } else {
        pattern.splitn(s, limit).map(str::to_string).collect()
    }
}

/// Splits on matches of the regular expression source `pattern`.
///
/// # Errors
///
/// Returns an `IllegalArgument` error if `pattern` does not compile.
pub fn split_regex(s: Option<&str>, pattern: &str, limit: usize) -> Result<Vec<String>> {
    let re = Regex::new(pattern)
        .map_err(|err| Error::illegal_argument(err.to_string()).with_context("split_regex"))?;
    Ok(split_pattern(s, &re, limit))
}

// =============================================================================
// Lines
// =============================================================================

/// Iterator over the lines of a string, splitting on `\r\n`, `\n` or `\r`.
///
/// A trailing terminator produces a final empty line, and the empty string
/// is a single empty line.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        let Some(end) = rest.find(['\n', '\r']) else {
            self.rest = None;
            return Some(rest);
        };
        let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        self.rest = Some(&rest[end + skip..]);
        Some(&rest[..end])
    }
}

/// A lazily split, restartable sequence of lines.
///
/// Every call to [`LineSeq::iter`] starts again from the first line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineSeq<'a> {
    text: Option<&'a str>,
}

impl<'a> LineSeq<'a> {
    /// Starts a fresh pass over the lines.
    #[must_use]
    pub fn iter(&self) -> Lines<'a> {
        Lines { rest: self.text }
    }
}

impl<'a> IntoIterator for LineSeq<'a> {
    type Item = &'a str;
    type IntoIter = Lines<'a>;

    fn into_iter(self) -> Lines<'a> {
        self.iter()
    }
}

impl<'a> IntoIterator for &LineSeq<'a> {
    type Item = &'a str;
    type IntoIter = Lines<'a>;

    fn into_iter(self) -> Lines<'a> {
        self.iter()
    }
}

/// All lines of `s`; empty for absent input.
#[must_use]
pub fn lines(s: Option<&str>) -> Vec<&str> {
    line_sequence(s).iter().collect()
}

/// A restartable lazy sequence over the lines of `s`; yields nothing for
/// absent input.
#[must_use]
pub fn line_sequence(s: Option<&str>) -> LineSeq<'_> {
    LineSeq { text: s }
}

// =============================================================================
// Joining
// =============================================================================

/// Formatting options for [`join_to_string`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOptions {
    /// Inserted between items.
    pub separator: String,
    /// Written before the first item.
    pub prefix: String,
    /// Written after the last item.
    pub postfix: String,
    /// Maximum number of items rendered, or `None` for all of them.
    pub limit: Option<usize>,
    /// Written in place of the items past `limit`.
    pub truncated: String,
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            prefix: String::new(),
            postfix: String::new(),
            limit: None,
            truncated: "...".to_string(),
        }
    }
}

impl JoinOptions {
    /// Default options with the given separator.
    #[must_use]
    pub fn separated_by(separator: impl Into<String>) -> Self {
        Self::default().with_separator(separator)
    }

    /// Sets the separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the postfix.
    #[must_use]
    pub fn with_postfix(mut self, postfix: impl Into<String>) -> Self {
        self.postfix = postfix.into();
        self
    }

    /// Renders at most `limit` items.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the marker written when items are cut off.
    #[must_use]
    pub fn with_truncated(mut self, truncated: impl Into<String>) -> Self {
        self.truncated = truncated.into();
        self
    }
}

/// Joins the `Display` form of each item.
///
/// Absent input renders as the empty string, without prefix or postfix.
pub fn join_to_string<I>(items: Option<I>, options: &JoinOptions) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    join_to_string_with(items, options, |item, out| {
        // Writing into a String cannot fail.
        let _ = write!(out, "{item}");
    })
}

/// Joins items rendered by `render`, which appends each item to the output.
pub fn join_to_string_with<I, F>(items: Option<I>, options: &JoinOptions, mut render: F) -> String
where
    I: IntoIterator,
    F: FnMut(I::Item, &mut String),
{
    let Some(items) = items else {
        return String::new();
    };
    let mut out = options.prefix.clone();
    let mut count = 0usize;
    for item in items {
        count += 1;
        if count > 1 {
            out.push_str(&options.separator);
        }
        if options.limit.is_some_and(|limit| count > limit) {
            out.push_str(&options.truncated);
            break;
        }
        render(item, &mut out);
    }
    out.push_str(&options.postfix);
    out
}
