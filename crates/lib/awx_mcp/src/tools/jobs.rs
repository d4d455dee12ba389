//! Parameter types for job tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use awx_core::payload::JobRunRequest;

/// Parameters for the `run_job` tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RunJobRequest {
    /// ID of the job template to launch (required).
    pub template_id: Option<u64>,
    /// Extra variables for this run. Omit for none.
    pub extra_vars: Option<serde_json::Map<String, serde_json::Value>>,
    /// Run only these tags, replacing the template's stored tags for this run. Omit to keep the template's tags.
    pub include_tags: Option<Vec<String>>,
    /// Skip these tags, replacing the template's stored skip tags for this run.
    pub exclude_tags: Option<Vec<String>>,
    /// Host pattern for this run only.
    pub limit: Option<String>,
}

impl From<RunJobRequest> for JobRunRequest {
    fn from(req: RunJobRequest) -> Self {
        Self {
            template_id: req.template_id,
            extra_vars: req.extra_vars,
            include_tags: req.include_tags,
            exclude_tags: req.exclude_tags,
            limit: req.limit,
        }
    }
}

/// Parameters for the `get_job` tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetJobRequest {
    /// ID of the job, as returned by `run_job`.
    pub job_id: u64,
}
