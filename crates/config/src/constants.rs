//! Centralized constants for the cfctl workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Configuration File Defaults
// =============================================================================

/// Current configuration document version.
pub const CONFIG_VERSION: u32 = 1;

/// Environment variable that overrides the configuration file path.
pub const CONFIG_PATH_ENV: &str = "CFCTL_CONFIG";

/// Environment variable that overrides the Cloudflare API base URL.
pub const API_URL_ENV: &str = "CFCTL_API_URL";

/// Default UI theme name.
pub const DEFAULT_THEME: &str = "dark";

/// Default output mode.
pub const DEFAULT_OUTPUT: &str = "interactive";

/// Default domains cache TTL in seconds.
pub const DEFAULT_DOMAINS_TTL_SECS: u64 = 300;

// =============================================================================
// API Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum number of retries for failed requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Default Cloudflare API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

// =============================================================================
// Validation Limits
// =============================================================================

/// Minimum account name length.
pub const MIN_ACCOUNT_NAME_LEN: usize = 3;

/// Maximum account name length.
pub const MAX_ACCOUNT_NAME_LEN: usize = 50;

/// Minimum plausible API token length.
pub const MIN_API_TOKEN_LEN: usize = 40;

/// Minimum plausible global API key length.
pub const MIN_API_KEY_LEN: usize = 32;

/// Maximum URLs (or tags) accepted in a single purge request.
pub const MAX_PURGE_ITEMS: usize = 30;

/// Maximum hostname length.
pub const MAX_HOSTNAME_LEN: usize = 253;

// =============================================================================
// Keyring
// =============================================================================

/// Service name used for keyring storage.
pub const KEYRING_SERVICE: &str = "cfctl";

// =============================================================================
// UI Timing
// =============================================================================

/// How long the domain list waits for zones before giving up.
pub const ZONES_LOAD_TIMEOUT_SECS: u64 = 20;

/// UI tick interval in milliseconds (spinner and blink animation).
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// Default capacity for the action channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;
