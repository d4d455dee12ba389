// @awa-component: MCP-TemplateTools
//
//! Parameter types for job template tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use awx_core::payload::TemplateCreationRequest;

/// Parameters for the `create_job_template` tool.
///
/// Required fields are optional here so that a missing one is reported by
/// name through the normal validation path.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateJobTemplateRequest {
    /// Display name of the new template (required).
    pub name: Option<String>,
    /// ID of the AWX project that contains the playbook (required).
    pub project_id: Option<u64>,
    /// ID of the AWX inventory to run against (required).
    pub inventory_id: Option<u64>,
    /// Playbook path inside the project, e.g. `playbooks/site.yml` (required).
    pub playbook: Option<String>,
    /// Tags to run, in order. Each tag must be non-empty, have no surrounding whitespace, and contain no comma.
    pub include_tags: Option<Vec<String>>,
    /// Tags to skip, in order. Same rules as `include_tags`.
    pub exclude_tags: Option<Vec<String>>,
    /// Optional template description.
    pub description: Option<String>,
    /// Optional host pattern limiting which inventory hosts are targeted.
    pub limit: Option<String>,
    /// Let `run_job` override the template's tags. Needed for per-run tag overrides to take effect.
    pub ask_tags_on_launch: Option<bool>,
    /// Let `run_job` supply extra variables.
    pub ask_variables_on_launch: Option<bool>,
}

impl From<CreateJobTemplateRequest> for TemplateCreationRequest {
    fn from(req: CreateJobTemplateRequest) -> Self {
        Self {
            name: req.name,
            project_id: req.project_id,
            inventory_id: req.inventory_id,
            playbook: req.playbook,
            include_tags: req.include_tags,
            exclude_tags: req.exclude_tags,
            description: req.description,
            limit: req.limit,
            ask_tags_on_launch: req.ask_tags_on_launch,
            ask_variables_on_launch: req.ask_variables_on_launch,
        }
    }
}

/// Parameters for the `list_job_templates` tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListJobTemplatesRequest {
    /// Free-text search across template names and descriptions.
    pub search: Option<String>,
}
