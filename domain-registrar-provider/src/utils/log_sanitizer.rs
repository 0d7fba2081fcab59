//! Log sanitization utilities
//!
//! Keeps contact details, signatures and access keys out of debug/error logs.

/// Maximum number of bytes of a payload to include in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a credential left visible by [`mask_credential`].
const VISIBLE_PREFIX: usize = 4;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a request or response body for logging.
///
/// Registration payloads carry full postal contacts, so anything beyond
/// `TRUNCATE_LIMIT` bytes is replaced by a length marker.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a credential, keeping only a short prefix (`"AKIAIOSF..."` -> `"AKIA****"`).
pub fn mask_credential(s: &str) -> String {
    let visible = floor_char_boundary(s, VISIBLE_PREFIX);
    if visible >= s.len() {
        "****".to_string()
    } else {
        format!("{}****", &s[..visible])
    }
}
