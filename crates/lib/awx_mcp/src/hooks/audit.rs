// @awa-component: MCP-AuditHook
//
//! Audit hook: emits one structured `tracing` record per tool call.

use async_trait::async_trait;
use tracing::info;

use super::{HookContext, HookError, ToolCallOutcome, ToolHook};

/// Audit hook: records every tool call under the `awx_mcp::audit` target.
#[derive(Debug, Default)]
pub struct AuditHook;

impl AuditHook {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ToolHook for AuditHook {
    async fn before_call(
        &self,
        _ctx: &HookContext,
        _params: &mut serde_json::Value,
    ) -> Result<(), HookError> {
        Ok(())
    }

    async fn after_call(
        &self,
        ctx: &HookContext,
        outcome: &mut ToolCallOutcome,
    ) -> Result<(), HookError> {
        let elapsed_ms = (chrono::Utc::now() - ctx.timestamp).num_milliseconds();
        match outcome {
            ToolCallOutcome::Success(_) => info!(
                target: "awx_mcp::audit",
                tool = %ctx.tool_name,
                success = true,
                elapsed_ms,
                "tool call"
            ),
            ToolCallOutcome::Error(error) => info!(
                target: "awx_mcp::audit",
                tool = %ctx.tool_name,
                success = false,
                elapsed_ms,
                %error,
                "tool call"
            ),
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "AuditHook"
    }
}
