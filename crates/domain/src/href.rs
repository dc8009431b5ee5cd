//! Detail-page paths for resources.

use std::fmt::Write;

/// Percent-encode `segment` for use as one path segment.
///
/// Only RFC 3986 unreserved characters pass through untouched, so names
/// containing `/`, `?`, `#` or spaces still land on a single route
/// parameter. Non-ASCII characters are encoded byte by byte as UTF-8.
#[must_use]
pub fn encode_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            encoded.push(char::from(byte));
        } else {
            let _ = write!(encoded, "%{byte:02X}");
        }
    }
    encoded
}
