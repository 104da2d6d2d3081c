//! Input validators for account and purge forms.
//!
//! Responsibilities:
//! - Validate account fields (name, email, API token, global API key).
//! - Validate purge inputs (URLs, hostnames, prefixes, tags).
//! - Parse free-form list input into trimmed, non-empty items.
//!
//! Does NOT handle:
//! - Any I/O or remote checks; every function here is pure.
//!
//! Invariants:
//! - List validators report the 1-based position of the first bad item.

use crate::constants::{
    MAX_ACCOUNT_NAME_LEN, MAX_HOSTNAME_LEN, MAX_PURGE_ITEMS, MIN_ACCOUNT_NAME_LEN, MIN_API_KEY_LEN,
    MIN_API_TOKEN_LEN,
};

/// A user-facing validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("email is required")]
    EmailRequired,
    #[error("invalid email format")]
    InvalidEmail,

    #[error("account name is required")]
    AccountNameRequired,
    #[error("account name must be at least 3 characters")]
    AccountNameTooShort,
    #[error("account name must be at most 50 characters")]
    AccountNameTooLong,
    #[error(
        "account name can only contain letters, numbers, dashes, underscores, dots, and spaces"
    )]
    AccountNameInvalidChars,

    #[error("API token is required")]
    TokenRequired,
    #[error("API token appears to be too short")]
    TokenTooShort,
    #[error("API key is required")]
    KeyRequired,
    #[error("API key appears to be too short")]
    KeyTooShort,

    #[error("URL is required")]
    UrlRequired,
    #[error("invalid URL format: {0}")]
    UrlFormat(String),
    #[error("URL must include scheme (http:// or https://)")]
    UrlMissingScheme,
    #[error("URL scheme must be http or https")]
    UrlScheme,
    #[error("URL must include a host")]
    UrlMissingHost,
    #[error("at least one URL is required")]
    NoUrls,
    #[error("maximum 30 URLs allowed per request")]
    TooManyUrls,
    #[error("URL {index}: {inner}")]
    UrlItem {
        index: usize,
        inner: Box<ValidationError>,
    },

    #[error("hostname is required")]
    HostnameRequired,
    #[error("hostname should not contain path")]
    HostnameHasPath,
    #[error("hostname should not contain query parameters")]
    HostnameHasQuery,
    #[error("invalid hostname length")]
    HostnameLength,
    #[error("at least one hostname is required")]
    NoHostnames,
    #[error("hostname {index}: {inner}")]
    HostnameItem {
        index: usize,
        inner: Box<ValidationError>,
    },

    #[error("prefix is required")]
    PrefixRequired,
    #[error("prefix must be a valid URL: {0}")]
    PrefixNotUrl(Box<ValidationError>),
    #[error("at least one prefix is required")]
    NoPrefixes,
    #[error("prefix {index}: {inner}")]
    PrefixItem {
        index: usize,
        inner: Box<ValidationError>,
    },

    #[error("at least one tag is required")]
    NoTags,
    #[error("maximum 30 tags allowed per request")]
    TooManyTags,
    #[error("tag {0}: tag cannot be empty")]
    EmptyTag(usize),
}

/// Validate an email address.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }

    let (local, domain) = email
        .rsplit_once('@')
        .ok_or(ValidationError::InvalidEmail)?;
    let bad_char = |c: char| c.is_whitespace() || matches!(c, '<' | '>' | ',' | ';' | '(' | ')');

    let local_ok = !local.is_empty() && !local.contains('@') && !local.chars().any(bad_char);
    let domain_ok = !domain.is_empty()
        && !domain.chars().any(bad_char)
        && domain.split('.').all(|label| !label.is_empty());

    if local_ok && domain_ok {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validate an account name: 3-50 characters of `[A-Za-z0-9._ -]`.
pub fn validate_account_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::AccountNameRequired);
    }
    if name.len() < MIN_ACCOUNT_NAME_LEN {
        return Err(ValidationError::AccountNameTooShort);
    }
    if name.len() > MAX_ACCOUNT_NAME_LEN {
        return Err(ValidationError::AccountNameTooLong);
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ' '))
    {
        return Err(ValidationError::AccountNameInvalidChars);
    }
    Ok(())
}

/// Validate an API token's shape.
pub fn validate_api_token(token: &str) -> Result<(), ValidationError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ValidationError::TokenRequired);
    }
    if token.len() < MIN_API_TOKEN_LEN {
        return Err(ValidationError::TokenTooShort);
    }
    Ok(())
}

/// Validate a global API key's shape.
pub fn validate_api_key(key: &str) -> Result<(), ValidationError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(ValidationError::KeyRequired);
    }
    if key.len() < MIN_API_KEY_LEN {
        return Err(ValidationError::KeyTooShort);
    }
    Ok(())
}

/// Validate an absolute http(s) URL with a host.
pub fn validate_url(input: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::UrlRequired);
    }

    let parsed = url::Url::parse(input).map_err(|e| match e {
        url::ParseError::RelativeUrlWithoutBase => ValidationError::UrlMissingScheme,
        url::ParseError::EmptyHost => ValidationError::UrlMissingHost,
        other => ValidationError::UrlFormat(other.to_string()),
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ValidationError::UrlScheme);
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::UrlMissingHost);
    }
    Ok(())
}

/// Validate a list of purge URLs (1 to 30 items).
pub fn validate_urls(urls: &[String]) -> Result<(), ValidationError> {
    if urls.is_empty() {
        return Err(ValidationError::NoUrls);
    }
    if urls.len() > MAX_PURGE_ITEMS {
        return Err(ValidationError::TooManyUrls);
    }
    for (i, url) in urls.iter().enumerate() {
        validate_url(url).map_err(|e| ValidationError::UrlItem {
            index: i + 1,
            inner: Box::new(e),
        })?;
    }
    Ok(())
}

/// Strip a leading `http://` or `https://` from a hostname.
pub fn normalize_hostname(hostname: &str) -> &str {
    hostname
        .strip_prefix("https://")
        .or_else(|| hostname.strip_prefix("http://"))
        .unwrap_or(hostname)
}

/// Validate a bare hostname. A leading scheme is tolerated.
pub fn validate_hostname(hostname: &str) -> Result<(), ValidationError> {
    if hostname.is_empty() {
        return Err(ValidationError::HostnameRequired);
    }

    let host = normalize_hostname(hostname);
    if host.contains('/') {
        return Err(ValidationError::HostnameHasPath);
    }
    if host.contains('?') {
        return Err(ValidationError::HostnameHasQuery);
    }
    if host.is_empty() || host.len() > MAX_HOSTNAME_LEN {
        return Err(ValidationError::HostnameLength);
    }
    Ok(())
}

/// Validate a list of hostnames (at least one).
pub fn validate_hostnames(hostnames: &[String]) -> Result<(), ValidationError> {
    if hostnames.is_empty() {
        return Err(ValidationError::NoHostnames);
    }
    for (i, host) in hostnames.iter().enumerate() {
        validate_hostname(host).map_err(|e| ValidationError::HostnameItem {
            index: i + 1,
            inner: Box::new(e),
        })?;
    }
    Ok(())
}

/// Validate a URL prefix.
pub fn validate_prefix(prefix: &str) -> Result<(), ValidationError> {
    if prefix.is_empty() {
        return Err(ValidationError::PrefixRequired);
    }
    validate_url(prefix).map_err(|e| ValidationError::PrefixNotUrl(Box::new(e)))
}

/// Validate a list of URL prefixes (at least one).
pub fn validate_prefixes(prefixes: &[String]) -> Result<(), ValidationError> {
    if prefixes.is_empty() {
        return Err(ValidationError::NoPrefixes);
    }
    for (i, prefix) in prefixes.iter().enumerate() {
        validate_prefix(prefix).map_err(|e| ValidationError::PrefixItem {
            index: i + 1,
            inner: Box::new(e),
        })?;
    }
    Ok(())
}

/// Validate a list of cache tags (1 to 30 non-empty items).
pub fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    if tags.is_empty() {
        return Err(ValidationError::NoTags);
    }
    if tags.len() > MAX_PURGE_ITEMS {
        return Err(ValidationError::TooManyTags);
    }
    if let Some(i) = tags.iter().position(|t| t.trim().is_empty()) {
        return Err(ValidationError::EmptyTag(i + 1));
    }
    Ok(())
}

/// Split comma-separated input, trimming each part and dropping empty ones.
pub fn parse_comma_separated(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split multi-line form input: one or more comma-separated items per line.
pub fn parse_list_input(input: &str) -> Vec<String> {
    input.lines().flat_map(parse_comma_separated).collect()
}
