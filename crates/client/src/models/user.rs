//! Credential verification payloads.

use serde::Deserialize;

/// Result of `GET /user/tokens/verify`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TokenVerification {
    pub id: String,
    pub status: String,
}

impl TokenVerification {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

/// Result of `GET /user`, used to verify global API key credentials.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: String,
}
