//! Account records stored in the configuration file.
//!
//! Invariants:
//! - `name` is the unique key for an account and for its keyring entry.
//! - The secret itself is never part of this type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an account authenticates against the Cloudflare API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    /// Scoped API token (bearer authentication).
    Token,
    /// Global API key plus account email.
    Key,
}

impl AuthType {
    /// Human-readable label for menus and summaries.
    pub fn label(self) -> &'static str {
        match self {
            Self::Token => "API Token",
            Self::Key => "Global API Key",
        }
    }

    /// Whether this auth type needs an email address.
    pub fn requires_email(self) -> bool {
        matches!(self, Self::Key)
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token => write!(f, "token"),
            Self::Key => write!(f, "key"),
        }
    }
}

/// A configured Cloudflare account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub auth_type: AuthType,
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new, non-default account. Timestamps are assigned by the store.
    pub fn new(name: impl Into<String>, email: Option<String>, auth_type: AuthType) -> Self {
        Self {
            name: name.into(),
            email: email.filter(|e| !e.trim().is_empty()),
            auth_type,
            default: false,
            created_at: DateTime::<Utc>::default(),
            updated_at: DateTime::<Utc>::default(),
        }
    }

    /// Short description used in account lists.
    pub fn description(&self) -> String {
        match (&self.email, self.auth_type) {
            (Some(email), _) => email.clone(),
            (None, AuthType::Token) => "Token authentication".to_string(),
            (None, AuthType::Key) => "Key authentication".to_string(),
        }
    }
}
