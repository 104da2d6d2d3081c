//! Environment variable helpers.

use crate::constants::API_URL_ENV;

/// Read an environment variable, treating unset, empty, and whitespace-only
/// values as absent. Surrounding whitespace is trimmed.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// API base URL override from `CFCTL_API_URL`, if set.
pub fn api_base_url_override() -> Option<String> {
    env_var_or_none(API_URL_ENV)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_whitespace_value_is_none() {
        temp_env::with_var("CFCTL_TEST_BLANK", Some("   "), || {
            assert_eq!(env_var_or_none("CFCTL_TEST_BLANK"), None);
        });
    }

    #[test]
    #[serial]
    fn test_value_is_trimmed() {
        temp_env::with_var(API_URL_ENV, Some(" http://127.0.0.1:9000 "), || {
            assert_eq!(
                api_base_url_override().as_deref(),
                Some("http://127.0.0.1:9000")
            );
        });
    }
}
