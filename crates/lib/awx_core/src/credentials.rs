//! Bearer token sources for AWX requests.

use async_trait::async_trait;

use crate::transport::TransportError;

/// Supplies the bearer token for each outbound call.
///
/// Called once per operation so implementations may rotate tokens.
#[async_trait]
pub trait CredentialSource: Send + Sync {
    async fn token(&self) -> Result<String, TransportError>;
}

/// A fixed token, typically an AWX personal access token from configuration.
#[derive(Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

// Keeps the secret out of debug logs.
impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticToken").field("token", &"***").finish()
    }
}

#[async_trait]
impl CredentialSource for StaticToken {
    async fn token(&self) -> Result<String, TransportError> {
        if self.token.trim().is_empty() {
            return Err(TransportError::Auth("AWX token is empty".into()));
        }
        Ok(self.token.clone())
    }
}
