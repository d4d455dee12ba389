//! # awx_mcp
//!
//! MCP (Model Context Protocol) server exposing AWX job template operations.
//!
//! The server is built as a library crate; `awx_mcp_server` wires it up
//! either on a Streamable HTTP port or on stdio.

pub mod auth;
pub mod hooks;
pub mod server;
pub mod tools;

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use awx_core::client::AwxClient;

use crate::auth::McpAuth;
use crate::hooks::HookPipeline;
use crate::server::AwxMcpServer;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Build an Axum router that serves the MCP Streamable HTTP endpoint at `/mcp`.
///
/// # Arguments
///
/// * `client`: shared AWX client used by every session.
/// * `hook_pipeline`: hooks run around every tool call.
/// * `auth`: expected bearer token for MCP requests, if any.
/// * `ct`: cancellation token for graceful shutdown of SSE streams.
pub fn mcp_router(
    client: Arc<AwxClient>,
    hook_pipeline: Arc<HookPipeline>,
    auth: McpAuth,
    ct: CancellationToken,
) -> axum::Router {
    let service: StreamableHttpService<AwxMcpServer, LocalSessionManager> =
        StreamableHttpService::new(
            move || Ok(AwxMcpServer::new(client.clone(), hook_pipeline.clone())),
            Arc::new(LocalSessionManager::default()),
            StreamableHttpServerConfig {
                stateful_mode: true,
                cancellation_token: ct,
                ..Default::default()
            },
        );

    axum::Router::new()
        .nest_service("/mcp", service)
        .layer(axum::middleware::from_fn_with_state(
            auth,
            crate::auth::mcp_auth_middleware,
        ))
}
