//! Data models for Cloudflare API responses and requests.

mod envelope;
mod purge;
mod user;
mod zones;

pub use envelope::{ApiMessage, CloudflareResponse, ResultInfo};
pub use purge::{PurgeBody, PurgeParams, PurgeRequest, PurgeResult};
pub use user::{TokenVerification, User};
pub use zones::{Plan, Zone};
