//! Zone models.

use serde::{Deserialize, Serialize};

/// A domain managed under the account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Zone {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub plan: Plan,
}

/// The subscription plan attached to a zone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    #[serde(default)]
    pub name: String,
}

impl Zone {
    /// Whether the zone is active on Cloudflare.
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}
