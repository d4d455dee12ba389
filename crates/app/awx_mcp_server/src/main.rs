//! AWX MCP server binary.
//!
//! Serves the AWX tools over Streamable HTTP (default) or stdio (`--stdio`).
//! In HTTP mode prints `{"mcpPort": N}` to stdout once the listener is bound.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use rmcp::ServiceExt;
use tokio_util::sync::CancellationToken;
use tracing::info;

use awx_core::config::AwxConfig;
use awx_mcp::auth::McpAuth;
use awx_mcp::hooks::default_pipeline;
use awx_mcp::server::AwxMcpServer;

/// CLI arguments for the AWX MCP server.
#[derive(Parser, Debug)]
#[command(name = "awx_mcp_server", about = "MCP server for AWX job templates", version)]
struct Args {
    /// Base URL of the AWX instance.
    #[arg(long, env = "AWX_BASE_URL")]
    awx_url: String,

    /// AWX personal access token.
    #[arg(long, env = "AWX_TOKEN", hide_env_values = true)]
    awx_token: String,

    /// Timeout for each AWX request, in seconds.
    #[arg(long, env = "AWX_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Address to bind the MCP HTTP listener to.
    #[arg(long, env = "MCP_BIND_ADDR", default_value = "127.0.0.1")]
    bind: String,

    /// MCP server port (0 = ephemeral).
    #[arg(long, env = "MCP_PORT", default_value_t = 0)]
    port: u16,

    /// Serve MCP over stdin/stdout instead of HTTP.
    #[arg(long, default_value_t = false)]
    stdio: bool,

    /// Bearer token MCP clients must present in HTTP mode. Unset disables auth.
    #[arg(long, env = "MCP_AUTH_TOKEN", hide_env_values = true)]
    mcp_token: Option<String>,

    /// Comma-separated tool names to reject (e.g. `run_job`).
    #[arg(long, env = "MCP_DISABLED_TOOLS", value_delimiter = ',')]
    disabled_tools: Vec<String>,
}

impl Args {
    fn awx_config(&self) -> AwxConfig {
        AwxConfig::new(&self.awx_url, &self.awx_token)
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }

    fn disabled_tools(&self) -> HashSet<String> {
        self.disabled_tools
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Logs go to stderr: stdout carries the port message or the stdio transport.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,awx_core=debug,awx_mcp=debug".into()),
        )
        .init();

    let args = Args::parse();
    let config = args.awx_config();

    info!(awx_url = %config.base_url, timeout = ?config.timeout, "starting awx_mcp_server");

    let client = Arc::new(config.client()?);
    let disabled = args.disabled_tools();
    if !disabled.is_empty() {
        info!(?disabled, "tools disabled by configuration");
    }
    let hook_pipeline = Arc::new(default_pipeline(disabled));

    if args.stdio {
        info!("serving MCP over stdio");
        let service = AwxMcpServer::new(client, hook_pipeline)
            .serve(rmcp::transport::stdio())
            .await?;
        service.waiting().await?;
        return Ok(());
    }

    let auth = McpAuth::new(args.mcp_token.clone());
    if !auth.is_enabled() {
        info!("MCP_AUTH_TOKEN not set, MCP endpoint is unauthenticated");
    }

    let ct = CancellationToken::new();
    let app = awx_mcp::mcp_router(client, hook_pipeline, auth, ct.clone());

    let bind = format!("{}:{}", args.bind, args.port);
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    let addr = listener.local_addr()?;

    // Report the bound port as JSON on stdout so a parent process can read it.
    println!("{}", serde_json::json!({ "mcpPort": addr.port() }));
    info!(%addr, "MCP server listening");

    let shutdown = ct.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        info!("shutdown requested");
        shutdown.cancel();
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { ct.cancelled().await })
        .await?;

    Ok(())
}
