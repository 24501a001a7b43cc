//! Component parsers shared by the date and time stamp readers.
//!
//! Components are read as canonical decimals: ASCII digits only, no sign,
//! no surrounding whitespace, and no leading zero unless the whole value is
//! `0`. Month, day and clock components may carry a single zero of padding
//! that is stripped first, so `"05"` and `"5"` are both accepted while
//! `"005"` and `"5Z"` are not.

use std::str::FromStr;

use crate::consts::TIME_COMPONENT_WIDTH;

/// Parses a canonical decimal.
pub(crate) fn canonical<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    s.parse().ok()
}

/// Parses a canonical decimal after stripping at most one leading `0`.
pub(crate) fn padded<T: FromStr>(s: &str) -> Option<T> {
    let unpadded = match s.strip_prefix('0') {
        Some("") => s,
        Some(rest) => rest,
        None => s,
    };
    canonical(unpadded)
}

/// Parses a clock component, which must be exactly two characters wide.
pub(crate) fn clock_component(s: &str) -> Option<u8> {
    if s.len() != TIME_COMPONENT_WIDTH {
        return None;
    }
    padded(s)
}
