// @awa-component: MCP-Auth
//
//! MCP bearer token authentication middleware.
//!
//! When a token is configured, every request to the MCP endpoint must carry
//! `Authorization: Bearer <token>`. Tokens are compared by SHA-256 digest.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{Request, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};
use tracing::debug;

/// Digest of the expected MCP bearer token. `None` disables authentication.
#[derive(Clone, Default)]
pub struct McpAuth {
    token_hash: Option<Arc<[u8]>>,
}

impl McpAuth {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token_hash: token
                .filter(|t| !t.is_empty())
                .map(|t| Arc::from(hash_token(&t))),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.token_hash.is_some()
    }

    fn accepts(&self, token: &str) -> bool {
        match self.token_hash.as_deref() {
            Some(expected) => hash_token(token).as_slice() == expected,
            None => true,
        }
    }
}

fn hash_token(token: &str) -> Vec<u8> {
    Sha256::digest(token.as_bytes()).to_vec()
}

/// Axum middleware: validates MCP bearer tokens.
///
/// Returns 401 if a token is configured and the request's token is missing,
/// malformed, or different.
pub async fn mcp_auth_middleware(
    State(auth): State<McpAuth>,
    request: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    if !auth.is_enabled() {
        return Ok(next.run(request).await);
    }

    let token = match request.headers().get(AUTHORIZATION) {
        Some(header) => {
            let header_str = header.to_str().unwrap_or("");
            match header_str.strip_prefix("Bearer ") {
                Some(t) => t,
                None => {
                    debug!("MCP auth: missing Bearer prefix");
                    return Err(StatusCode::UNAUTHORIZED);
                }
            }
        }
        None => {
            debug!("MCP auth: no Authorization header");
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    if !auth.accepts(token) {
        debug!("MCP auth: token mismatch");
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(next.run(request).await)
}
