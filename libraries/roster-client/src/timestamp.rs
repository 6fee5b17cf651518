//! Parsing for the provider's `created_on` timestamps.
//!
//! The provider emits ISO-8601 strings, but not always with the colon in the
//! UTC offset: `2024-01-01T00:00:00+0000` shows up alongside
//! `2024-01-01T00:00:00+00:00`. The parser normalizes the former to the
//! latter unconditionally before parsing, so callers never see the
//! difference.

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset, NaiveDateTime};

/// Parse a `created_on` value from a provider response.
///
/// Accepts offsets with or without the colon separator (`+00:00` / `+0000`),
/// a trailing `Z`, optional fractional seconds, and offset-less timestamps
/// (interpreted as UTC).
pub fn parse_created_on(raw: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    let normalized = normalize_offset(raw);
    match DateTime::parse_from_rfc3339(&normalized) {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            // Offset-less stamps are still valid ISO-8601; treat them as UTC.
            NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|naive| naive.and_utc().fixed_offset())
                .map_err(|_| err)
        }
    }
}

/// Insert the colon into a `±HHMM` offset suffix, leaving everything else
/// untouched.
fn normalize_offset(raw: &str) -> Cow<'_, str> {
    let bytes = raw.as_bytes();
    if bytes.len() >= 6 {
        let tail = &bytes[bytes.len() - 5..];
        let sign = tail[0];
        if (sign == b'+' || sign == b'-') && tail[1..].iter().all(u8::is_ascii_digit) {
            let split = raw.len() - 2;
            let mut patched = String::with_capacity(raw.len() + 1);
            patched.push_str(&raw[..split]);
            patched.push(':');
            patched.push_str(&raw[split..]);
            return Cow::Owned(patched);
        }
    }
    Cow::Borrowed(raw)
}
