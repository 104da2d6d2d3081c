//! URL encoding utilities for constructing safe API paths.
//!
//! Zone identifiers come from the API, but they are still percent-encoded
//! before being placed in a path so a malformed id cannot alter the route.
//!
//! # Example
//!
//! ```
//! use cfctl_client::endpoints::url_encoding::encode_path_segment;
//!
//! let encoded = encode_path_segment("zone/../user");
//! assert_eq!(encoded, "zone%2F..%2Fuser");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters that must be percent-encoded in URL path segments.
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
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#');

/// Percent-encode a string for safe use as a single URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_zone_id_unchanged() {
        assert_eq!(
            encode_path_segment("023e105f4ecef8ad9ca31a8372d0c353"),
            "023e105f4ecef8ad9ca31a8372d0c353"
        );
    }

    #[test]
    fn test_reserved_characters_encoded() {
        assert_eq!(encode_path_segment("a/b?c#d"), "a%2Fb%3Fc%23d");
        assert_eq!(encode_path_segment("50%"), "50%25");
    }
}
