// @awa-component: AWX-HttpTransport
//
//! reqwest-backed [`Transport`] for the AWX REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::transport::{ApiRequest, Method, Transport, TransportError};

/// Sends requests to a fixed AWX base URL with bearer authentication.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Build a transport for `base_url` with a per-request timeout.
    ///
    /// A path prefix on the base URL (e.g. `https://host/awx`) is kept.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| TransportError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(TransportError::InvalidUrl(format!("{base_url}: not a base URL")));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Request(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, base_url })
    }

    fn url_for(&self, endpoint: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| TransportError::InvalidUrl(format!("{endpoint}: {e}")))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest, token: &str) -> Result<Value, TransportError> {
        let url = self.url_for(&request.endpoint)?;
        debug!(method = %request.method, %url, "sending AWX request");

        let builder = match request.method {
            Method::Get => self.client.get(url.clone()),
            Method::Post => self.client.post(url.clone()),
        };
        let builder = builder.bearer_auth(token);
        let builder = match &request.payload {
            Some(payload) => builder.json(payload),
            None => builder,
        };

        let resp = builder
            .send()
            .await
            .map_err(|e| TransportError::Request(format!("AWX request to {url} failed: {e}")))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::Request(format!("Failed to read AWX response: {e}")))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), %url, "AWX request rejected");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body)
            .map_err(|e| TransportError::Decode(format!("AWX response parse error: {e}")))
    }
}
