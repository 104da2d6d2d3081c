//! Cloudflare REST API client.
//!
//! This crate provides a type-safe client for the subset of the Cloudflare
//! v4 API that cfctl needs: credential verification, zone listing, and
//! cache purging. It supports both scoped API tokens and the legacy global
//! API key with email.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use auth::Credentials;
pub use client::CloudflareClient;
pub use client::builder::CloudflareClientBuilder;
pub use error::{ClientError, Result};
pub use models::{Plan, PurgeParams, PurgeRequest, Zone};
