//! URL encoding utilities for constructing safe API paths.
//!
//! Scope identifiers are fully-qualified `account:kind:id` strings that
//! must travel as a single path segment. Without percent-encoding, a
//! slash inside an identifier would create a nested path and a `?` would
//! start a query string.
//!
//! # Example
//!
//! ```
//! use audit_client::endpoints::url_encoding::encode_path_segment;
//!
//! let encoded = encode_path_segment("acct:user:alice");
//! assert_eq!(encoded, "acct%3Auser%3Aalice");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// Based on RFC 3986 section 3.3, plus characters that have special
/// meaning in audit service paths or could cause issues:
/// - Slash: prevents path traversal
/// - Percent: prevents double-encoding issues
/// - Colon: scope identifiers contain colons which must stay inside the
///   segment rather than read as URL syntax
/// - Question mark and hash: have special URL meaning
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'~')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b':')
    .add(b'@')
    .add(b'&')
    .add(b'=')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
///
/// Use this for any identifier interpolated into a feed path, in
/// particular role and resource ids.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
