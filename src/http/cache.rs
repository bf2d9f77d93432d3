//! HTTP cache validation module
//!
//! Provides `Last-Modified` formatting and `If-Modified-Since` handling.

use chrono::{DateTime, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

/// Whole seconds since the Unix epoch, 0 for pre-epoch times
pub fn unix_secs(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH).map_or(0, |d| d.as_secs())
}

/// Format Unix seconds as an RFC 7231 HTTP-date
///
/// # Examples
/// `784_111_777` → `Sun, 06 Nov 1994 08:49:37 GMT`
pub fn http_date(secs: u64) -> String {
    let secs = i64::try_from(secs).unwrap_or(i64::MAX);
    DateTime::<Utc>::from_timestamp(secs, 0)
        .unwrap_or_default()
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

/// Parse an HTTP-date header value into Unix seconds
pub fn parse_http_date(value: &str) -> Option<u64> {
    let parsed = DateTime::parse_from_rfc2822(value.trim()).ok()?;
    u64::try_from(parsed.timestamp()).ok()
}

/// Check whether the client's copy is still current
///
/// Returns true (should return 304) when `If-Modified-Since` is a valid date
/// and the file has not been modified after it.
pub fn not_modified_since(if_modified_since: Option<&str>, modified_secs: u64) -> bool {
    if_modified_since
        .and_then(parse_http_date)
        .is_some_and(|since| modified_secs <= since)
}
