//! Utility functions for the TUI crate.

/// Truncate `s` to at most `max_chars` characters, ending with `...` when cut.
///
/// Counts characters, not bytes, so multi-byte names never split mid-codepoint.
///
/// # Examples
///
/// ```
/// use cfctl::utils::truncate;
///
/// assert_eq!(truncate("example.com", 20), "example.com");
/// assert_eq!(truncate("a-very-long-zone-name.example.com", 12), "a-very-lo...");
/// ```
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars <= 3 {
        return ".".repeat(max_chars);
    }
    let kept: String = s.chars().take(max_chars - 3).collect();
    format!("{kept}...")
}

/// Pick the singular or plural form of a word for `count`.
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Format a count with the matching word form, e.g. `3 URLs`.
///
/// # Examples
///
/// ```
/// use cfctl::utils::format_count;
///
/// assert_eq!(format_count(1, "URL", "URLs"), "1 URL");
/// assert_eq!(format_count(3, "URL", "URLs"), "3 URLs");
/// ```
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    format!("{count} {}", pluralize(count, singular, plural))
}

/// Plural form of a purge item noun.
pub fn plural_noun(noun: &str) -> String {
    match noun {
        "prefix" => "prefixes".to_string(),
        other => format!("{other}s"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("abc", 3), "abc");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("ñandú-ñandú", 8), "ñandú...");
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate("abcdef", 2), "..");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0, "zone", "zones"), "0 zones");
        assert_eq!(format_count(1, "zone", "zones"), "1 zone");
        assert_eq!(format_count(2, "zone", "zones"), "2 zones");
    }

    #[test]
    fn test_plural_noun() {
        assert_eq!(plural_noun("URL"), "URLs");
        assert_eq!(plural_noun("prefix"), "prefixes");
        assert_eq!(plural_noun("hostname"), "hostnames");
    }

    proptest::proptest! {
        #[test]
        fn prop_truncate_never_exceeds_limit(s in "\\PC{0,80}", max in 0usize..40) {
            let out = truncate(&s, max);
            proptest::prop_assert!(out.chars().count() <= max);
            if s.chars().count() <= max {
                proptest::prop_assert_eq!(out, s);
            }
        }
    }
}
