//! REST API endpoint implementations.
//!
//! Each endpoint is a free function over a shared `reqwest::Client`, the
//! API base URL, and the caller's credentials. [`crate::CloudflareClient`]
//! wraps them with timeouts and operation context.

mod purge;
mod request;
pub mod url_encoding;
mod verify;
mod zones;

pub use purge::purge_cache;
pub use request::{read_result, send_request_with_retry};
pub use url_encoding::encode_path_segment;
pub use verify::{verify_api_key, verify_api_token, verify_credentials};
pub use zones::{ZONES_PER_PAGE, get_zone, list_zones};
