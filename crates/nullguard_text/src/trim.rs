//! Trimming and case conversion.
//!
//! Absent input stays absent. Case mapping uses the Unicode default rules
//! from the standard library.

/// Strips leading and trailing whitespace.
#[must_use]
pub fn trim(s: Option<&str>) -> Option<&str> {
    s.map(str::trim)
}

/// Strips leading whitespace.
#[must_use]
pub fn trim_start(s: Option<&str>) -> Option<&str> {
    s.map(str::trim_start)
}

/// Strips trailing whitespace.
#[must_use]
pub fn trim_end(s: Option<&str>) -> Option<&str> {
    s.map(str::trim_end)
}

/// Trims, then returns `None` if nothing is left.
#[must_use]
pub fn trim_to_null(s: Option<&str>) -> Option<&str> {
    trim(s).filter(|t| !t.is_empty())
}

/// Uppercases every char.
#[must_use]
pub fn to_upper_case(s: Option<&str>) -> Option<String> {
    s.map(str::to_uppercase)
}

/// Lowercases every char.
#[must_use]
pub fn to_lower_case(s: Option<&str>) -> Option<String> {
    s.map(str::to_lowercase)
}

/// Uppercases the first char and lowercases the rest.
#[must_use]
pub fn capitalize(s: Option<&str>) -> Option<String> {
    let s = s?;
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return Some(String::new());
    };
    let mut out: String = first.to_uppercase().collect();
    out.push_str(&chars.as_str().to_lowercase());
    Some(out)
}

/// Lowercases the first char and leaves the rest unchanged.
#[must_use]
pub fn decapitalize(s: Option<&str>) -> Option<String> {
    let s = s?;
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return Some(String::new());
    };
    let mut out: String = first.to_lowercase().collect();
    out.push_str(chars.as_str());
    Some(out)
}
