//! Base64 codec and lenient number/boolean parsing.
//!
//! Malformed input yields `None` rather than an error. Each rejection is
//! reported as a `trace` event on the `nullguard::text` target.

use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Base64 (standard alphabet, padded) of the UTF-8 bytes of `s`.
#[must_use]
pub fn encode_base64(s: Option<&str>) -> Option<String> {
    s.map(|s| STANDARD.encode(s.as_bytes()))
}

/// Decodes standard base64 into UTF-8 text.
///
/// Returns `None` for absent input, invalid base64, or bytes that are not
/// valid UTF-8.
#[must_use]
pub fn decode_base64(s: Option<&str>) -> Option<String> {
    let bytes = STANDARD
        .decode(s?)
        .inspect_err(|err| tracing::trace!(target: "nullguard::text", %err, "rejected base64 input"))
        .ok()?;
    String::from_utf8(bytes)
        .inspect_err(|err| tracing::trace!(target: "nullguard::text", %err, "decoded bytes are not UTF-8"))
        .ok()
}

fn parse_or_null<T>(s: Option<&str>) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let s = s?;
    s.parse()
        .inspect_err(|err| {
            tracing::trace!(
                target: "nullguard::text",
                input = s,
                ty = std::any::type_name::<T>(),
                %err,
                "rejected numeric input"
            );
        })
        .ok()
}

/// Parses a 32-bit integer.
#[must_use]
pub fn to_int_or_null(s: Option<&str>) -> Option<i32> {
    parse_or_null(s)
}

/// Parses a 64-bit integer.
#[must_use]
pub fn to_long_or_null(s: Option<&str>) -> Option<i64> {
    parse_or_null(s)
}

/// Parses a 64-bit float.
#[must_use]
pub fn to_double_or_null(s: Option<&str>) -> Option<f64> {
    parse_or_null(s)
}

/// Parses a 32-bit float.
#[must_use]
pub fn to_float_or_null(s: Option<&str>) -> Option<f32> {
    parse_or_null(s)
}

/// Parses `true`/`1`/`yes`/`on` and `false`/`0`/`no`/`off`, ignoring case.
#[must_use]
pub fn to_boolean_or_null(s: Option<&str>) -> Option<bool> {
    match s?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        other => {
            tracing::trace!(target: "nullguard::text", input = other, "rejected boolean input");
            None
        }
    }
}
