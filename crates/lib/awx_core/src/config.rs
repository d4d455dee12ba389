//! AWX connection configuration.

use std::sync::Arc;
use std::time::Duration;

use crate::client::AwxClient;
use crate::credentials::StaticToken;
use crate::http::HttpTransport;
use crate::transport::TransportError;

/// Default per-request timeout for AWX calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to reach AWX.
#[derive(Clone)]
pub struct AwxConfig {
    /// Base URL of the AWX instance (e.g. "https://awx.example.com").
    pub base_url: String,
    /// Personal access token sent as `Authorization: Bearer <token>`.
    pub token: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl AwxConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the reqwest transport for this configuration.
    pub fn http_transport(&self) -> Result<HttpTransport, TransportError> {
        HttpTransport::new(&self.base_url, self.timeout)
    }

    /// Build a client wired to the HTTP transport and a static token.
    pub fn client(&self) -> Result<AwxClient, TransportError> {
        Ok(AwxClient::new(
            Arc::new(self.http_transport()?),
            Arc::new(StaticToken::new(self.token.clone())),
        ))
    }
}

impl std::fmt::Debug for AwxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwxConfig")
            .field("base_url", &self.base_url)
            .field("token", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}
