// @awa-component: MCP-HookPipeline
//
//! Hook/middleware pipeline for MCP tool calls.
//!
//! Hooks run before and after every tool call and can inspect, transform,
//! or reject calls. Built-in hooks provide audit logging and access control.

pub mod access_control;
pub mod audit;

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

/// Context passed to hooks for each tool call.
#[derive(Debug, Clone)]
pub struct HookContext {
    pub tool_name: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HookContext {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Scope at which a hook applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookScope {
    Global,
    Tool(String),
}

/// Outcome of a tool call, passed to after_call hooks.
#[derive(Debug, Clone)]
pub enum ToolCallOutcome {
    Success(serde_json::Value),
    Error(String),
}

/// Errors that can occur in hooks.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Hook error: {0}")]
    Internal(String),
}

/// Hook trait: implement for custom hook logic.
///
/// Hooks form an ordered pipeline. `before_call` runs in order; `after_call`
/// runs in reverse order (onion model).
#[async_trait]
pub trait ToolHook: Send + Sync {
    /// Called before tool execution. Changes to `params` reach the tool;
    /// return Err to reject the call.
    async fn before_call(
        &self,
        ctx: &HookContext,
        params: &mut serde_json::Value,
    ) -> Result<(), HookError>;

    /// Called after tool execution. Changes to `outcome` reach the caller.
    async fn after_call(
        &self,
        ctx: &HookContext,
        outcome: &mut ToolCallOutcome,
    ) -> Result<(), HookError>;

    /// Hook identifier for debugging/logging.
    fn name(&self) -> &str;
}

/// Ordered pipeline of hooks.
pub struct HookPipeline {
    hooks: Vec<(HookScope, Arc<dyn ToolHook>)>,
}

impl HookPipeline {
    /// Create a new pipeline from an ordered list of scoped hooks.
    pub fn new(hooks: Vec<(HookScope, Arc<dyn ToolHook>)>) -> Self {
        Self { hooks }
    }

    /// Create an empty pipeline (no-op).
    pub fn empty() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Run all before_call hooks in order. Short-circuits on error.
    pub async fn run_before(
        &self,
        ctx: &HookContext,
        params: &mut serde_json::Value,
    ) -> Result<(), HookError> {
        for (scope, hook) in &self.hooks {
            if scope_matches(scope, ctx) {
                hook.before_call(ctx, params).await?;
            }
        }
        Ok(())
    }

    /// Run all after_call hooks in reverse order.
    pub async fn run_after(
        &self,
        ctx: &HookContext,
        outcome: &mut ToolCallOutcome,
    ) -> Result<(), HookError> {
        for (scope, hook) in self.hooks.iter().rev() {
            if scope_matches(scope, ctx) {
                hook.after_call(ctx, outcome).await?;
            }
        }
        Ok(())
    }
}

fn scope_matches(scope: &HookScope, ctx: &HookContext) -> bool {
    match scope {
        HookScope::Global => true,
        HookScope::Tool(name) => ctx.tool_name == *name,
    }
}

/// Build the default hook pipeline.
///
/// Pipeline order: AuditHook → AccessControlHook. Audit sits outermost so
/// rejected calls are still recorded.
pub fn default_pipeline(disabled_tools: HashSet<String>) -> HookPipeline {
    HookPipeline::new(vec![
        (HookScope::Global, Arc::new(audit::AuditHook::new())),
        (
            HookScope::Global,
            Arc::new(access_control::AccessControlHook::new(disabled_tools)),
        ),
    ])
}

#[cfg(test)]
mod tests;
