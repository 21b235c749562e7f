//! ETag helpers for the polling game-state endpoint.
//!
//! The session keeps a monotonic version counter; clients replay it via
//! `If-None-Match` and get `304 Not Modified` while nothing has changed.

/// ETag for a session snapshot.
///
/// Format: `"session-v{version}"` (with quotes, as required by HTTP).
pub fn session_etag(version: u64) -> String {
    format!(r#""session-v{version}""#)
}

/// Whether an `If-None-Match` header value matches the current ETag.
///
/// Accepts the RFC 9110 wildcard and comma-separated candidate lists.
pub fn if_none_match_satisfied(header_value: &str, etag: &str) -> bool {
    header_value.trim() == "*"
        || header_value
            .split(',')
            .map(str::trim)
            .any(|candidate| candidate == etag)
}
