//! Sentinel-returning field parsers.
//!
//! Every helper takes a half-open character range into the framed line and
//! never fails: a substring that does not parse yields the `-1` sentinel.
//! Ranges past the end of a short line are clamped, matching the truncating
//! slice semantics of the instrument's original tooling.

use chrono::NaiveDateTime;

/// Placeholder published for any field that fails to parse.
pub const SENTINEL: i64 = -1;

/// Clamped substring extraction; out-of-range yields "".
pub fn label_field(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    if start >= end {
        return "";
    }
    line.get(start..end).unwrap_or("")
}

/// Base-10 integer field; `-1` on any parse failure.
pub fn int_field(line: &str, start: usize, end: usize) -> i64 {
    label_field(line, start, end)
        .trim()
        .parse::<i64>()
        .unwrap_or(SENTINEL)
}

/// Base-2 integer field (the digital status word); `-1` on failure.
pub fn binary_field(line: &str, start: usize, end: usize) -> i64 {
    i64::from_str_radix(label_field(line, start, end).trim(), 2).unwrap_or(SENTINEL)
}

/// Float field; `-1` on any parse failure.
pub fn float_field(line: &str, start: usize, end: usize) -> f64 {
    label_field(line, start, end)
        .trim()
        .parse::<f64>()
        .unwrap_or(SENTINEL as f64)
}

/// Timestamp field holding `YR DOY HR MIN SEC`, interpreted as UTC and
/// converted to Unix epoch seconds; `-1` on failure.
pub fn timestamp_field(line: &str, start: usize, end: usize) -> i64 {
    NaiveDateTime::parse_from_str(label_field(line, start, end).trim(), "%y %j %H %M %S")
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or(SENTINEL)
}
