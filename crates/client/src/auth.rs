//! Authentication credentials and request header injection.

use cfctl_config::{Account, AuthType};
use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{ClientError, Result};

/// Credentials for authenticating with the Cloudflare API.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Scoped API token, sent as a bearer token.
    /// Preferred: supports fine-grained permissions and easy rotation.
    ApiToken { token: SecretString },
    /// Legacy global API key, sent with the account email.
    ApiKey { email: String, key: SecretString },
}

impl Credentials {
    /// Build credentials for a stored account and its secret.
    ///
    /// Key authentication requires the account to carry an email.
    pub fn for_account(account: &Account, secret: SecretString) -> Result<Self> {
        match account.auth_type {
            AuthType::Token => Ok(Self::ApiToken { token: secret }),
            AuthType::Key => {
                let email = account
                    .email
                    .clone()
                    .filter(|e| !e.trim().is_empty())
                    .ok_or_else(|| {
                        ClientError::AuthFailed(
                            "either API token or API key with email must be provided".to_string(),
                        )
                    })?;
                Ok(Self::ApiKey { email, key: secret })
            }
        }
    }

    /// Whether these are scoped API token credentials.
    pub fn is_api_token(&self) -> bool {
        matches!(self, Self::ApiToken { .. })
    }

    /// Attach the authentication headers for these credentials.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::ApiToken { token } => {
                builder.header("Authorization", format!("Bearer {}", token.expose_secret()))
            }
            Self::ApiKey { email, key } => builder
                .header("X-Auth-Email", email)
                .header("X-Auth-Key", key.expose_secret()),
        }
    }
}
