// @awa-component: MCP-Server
//
//! MCP server handler: defines the AWX MCP server and its tools.

use std::future::Future;
use std::sync::Arc;

use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use awx_core::AwxError;
use awx_core::client::AwxClient;
use awx_core::payload::{JobRunRequest, TemplateCreationRequest};

use crate::hooks::{HookContext, HookError, HookPipeline, ToolCallOutcome};
use crate::tools::jobs::{GetJobRequest, RunJobRequest};
use crate::tools::templates::{CreateJobTemplateRequest, ListJobTemplatesRequest};

/// AWX MCP server handler.
///
/// Holds the shared [`AwxClient`], the hook pipeline, and a `ToolRouter`
/// for tool dispatch. Cheap to clone; one instance is created per MCP
/// session.
#[derive(Clone)]
pub struct AwxMcpServer {
    client: Arc<AwxClient>,
    hook_pipeline: Arc<HookPipeline>,
    tool_router: ToolRouter<Self>,
}

/// Helper to serialize a value to a pretty JSON CallToolResult.
fn json_result<T: serde::Serialize>(value: &T) -> Result<CallToolResult, ErrorData> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ErrorData::new(ErrorCode::INTERNAL_ERROR, e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// MCP error code for a core error.
///
/// Locally detected problems are the caller's to fix (`INVALID_PARAMS`);
/// anything from AWX is passed on with its diagnostic intact.
fn awx_error_code(err: &AwxError) -> ErrorCode {
    if err.is_validation() {
        ErrorCode::INVALID_PARAMS
    } else {
        ErrorCode::INTERNAL_ERROR
    }
}

fn hook_error_data(err: HookError) -> ErrorData {
    match err {
        HookError::AccessDenied(msg) => ErrorData::new(ErrorCode::INVALID_REQUEST, msg, None),
        HookError::Internal(msg) => ErrorData::new(ErrorCode::INTERNAL_ERROR, msg, None),
    }
}

#[tool_router]
impl AwxMcpServer {
    /// Create a new server instance.
    pub fn new(client: Arc<AwxClient>, hook_pipeline: Arc<HookPipeline>) -> Self {
        Self {
            client,
            hook_pipeline,
            tool_router: Self::tool_router(),
        }
    }

    /// Return tool definitions registered in this server.
    #[cfg(test)]
    pub(crate) fn list_tools() -> Vec<rmcp::model::Tool> {
        Self::tool_router().list_all()
    }

    /// Run before-hooks, then the operation, then after-hooks.
    ///
    /// Hooks see the tool parameters as JSON. The operation runs on the
    /// parameters as the before-hooks left them, and the caller receives the
    /// outcome as the after-hooks left it.
    async fn dispatch<P, F, Fut>(
        &self,
        tool_name: &str,
        request: P,
        op: F,
    ) -> Result<CallToolResult, ErrorData>
    where
        P: Serialize + DeserializeOwned,
        F: FnOnce(Arc<AwxClient>, P) -> Fut,
        Fut: Future<Output = awx_core::Result<Value>>,
    {
        let ctx = HookContext::new(tool_name);
        let mut params = serde_json::to_value(&request)
            .map_err(|e| ErrorData::new(ErrorCode::INTERNAL_ERROR, e.to_string(), None))?;

        if let Err(e) = self.hook_pipeline.run_before(&ctx, &mut params).await {
            let mut outcome = ToolCallOutcome::Error(e.to_string());
            let _ = self.hook_pipeline.run_after(&ctx, &mut outcome).await;
            return Err(hook_error_data(e));
        }

        let request: P = match serde_json::from_value(params) {
            Ok(request) => request,
            Err(e) => {
                let message = format!("invalid parameters: {e}");
                let mut outcome = ToolCallOutcome::Error(message.clone());
                let _ = self.hook_pipeline.run_after(&ctx, &mut outcome).await;
                return Err(ErrorData::new(ErrorCode::INVALID_PARAMS, message, None));
            }
        };

        // The success code is only used if an after-hook turns it into an error.
        let (mut outcome, code) = match op(self.client.clone(), request).await {
            Ok(value) => (ToolCallOutcome::Success(value), ErrorCode::INTERNAL_ERROR),
            Err(e) => (ToolCallOutcome::Error(e.to_string()), awx_error_code(&e)),
        };
        let _ = self.hook_pipeline.run_after(&ctx, &mut outcome).await;

        match outcome {
            ToolCallOutcome::Success(value) => json_result(&value),
            ToolCallOutcome::Error(message) => Err(ErrorData::new(code, message, None)),
        }
    }

    /// Create an AWX job template, optionally with tags to run or skip.
    #[tool(
        description = "Create an AWX job template for a playbook. Tags are given as lists and sent to AWX as comma-joined strings."
    )]
    async fn create_job_template(
        &self,
        Parameters(req): Parameters<CreateJobTemplateRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(
            "create_job_template",
            req,
            |client, req: CreateJobTemplateRequest| async move {
                let request = TemplateCreationRequest::from(req);
                client.create_job_template(&request).await
            },
        )
        .await
    }

    /// Launch a job from a template.
    #[tool(
        description = "Launch a job from an AWX job template. Tags given here replace the template's tags for this run only; omit them to use the template's tags."
    )]
    async fn run_job(
        &self,
        Parameters(req): Parameters<RunJobRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch("run_job", req, |client, req: RunJobRequest| async move {
            let request = JobRunRequest::from(req);
            client.run_job(&request).await
        })
        .await
    }

    /// Fetch the status of a job.
    #[tool(description = "Get the current status and details of an AWX job")]
    async fn get_job(
        &self,
        Parameters(req): Parameters<GetJobRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch("get_job", req, |client, req: GetJobRequest| async move {
            client.get_job(req.job_id).await
        })
        .await
    }

    /// List job templates.
    #[tool(description = "List AWX job templates, optionally filtered by a search term")]
    async fn list_job_templates(
        &self,
        Parameters(req): Parameters<ListJobTemplatesRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(
            "list_job_templates",
            req,
            |client, req: ListJobTemplatesRequest| async move {
                client.list_job_templates(req.search.as_deref()).await
            },
        )
        .await
    }
}

#[tool_handler]
impl ServerHandler for AwxMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "AWX MCP server: create job templates and launch jobs with tag filters".into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
