//! Transport seam between the operations and the AWX HTTP API.
//!
//! [`AwxClient`](crate::client::AwxClient) only ever talks to a
//! `dyn Transport`, so tests substitute a recording double and production
//! uses [`HttpTransport`](crate::http::HttpTransport).

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// HTTP methods used against the AWX API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// A fully built request, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base URL, e.g. `/api/v2/jobs/12/`.
    pub endpoint: String,
    /// JSON body. `None` for requests without one.
    pub payload: Option<Value>,
}

impl ApiRequest {
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            endpoint: endpoint.into(),
            payload: None,
        }
    }

    pub fn post(endpoint: impl Into<String>, payload: Value) -> Self {
        Self {
            method: Method::Post,
            endpoint: endpoint.into(),
            payload: Some(payload),
        }
    }
}

/// Failures reported by a transport or credential source.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Remote returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response decode error: {0}")]
    Decode(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Sends one request to the AWX API and returns the decoded JSON response.
///
/// Implementations own timeouts and cancellation. They must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest, token: &str) -> Result<Value, TransportError>;
}
