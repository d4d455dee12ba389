// @awa-component: MCP-AccessControlHook
//
//! Access control hook: rejects calls to tools disabled by configuration.

use std::collections::HashSet;

use async_trait::async_trait;

use super::{HookContext, HookError, ToolCallOutcome, ToolHook};

/// Blocks calls to any tool named in the disabled set.
pub struct AccessControlHook {
    disabled: HashSet<String>,
}

impl AccessControlHook {
    pub fn new(disabled: HashSet<String>) -> Self {
        Self { disabled }
    }
}

#[async_trait]
impl ToolHook for AccessControlHook {
    async fn before_call(
        &self,
        ctx: &HookContext,
        _params: &mut serde_json::Value,
    ) -> Result<(), HookError> {
        if self.disabled.contains(&ctx.tool_name) {
            return Err(HookError::AccessDenied(format!(
                "Tool {} is disabled on this server",
                ctx.tool_name
            )));
        }
        Ok(())
    }

    async fn after_call(
        &self,
        _ctx: &HookContext,
        _outcome: &mut ToolCallOutcome,
    ) -> Result<(), HookError> {
        Ok(())
    }

    fn name(&self) -> &str {
        "AccessControlHook"
    }
}
