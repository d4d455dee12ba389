// @awa-component: AWX-Client
//
//! Validated AWX operations.
//!
//! Each operation builds its payload first, then fetches a token and issues
//! exactly one transport call. Responses are returned as AWX sent them.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::credentials::CredentialSource;
use crate::error::{AwxError, Result};
use crate::payload::{
    JobRunRequest, TemplateCreationRequest, build_job_run_payload,
    build_template_creation_payload,
};
use crate::transport::{ApiRequest, Transport};

/// Endpoint for job template collection.
pub const JOB_TEMPLATES_ENDPOINT: &str = "/api/v2/job_templates/";

/// Client for the handful of AWX operations this crate exposes.
#[derive(Clone)]
pub struct AwxClient {
    transport: Arc<dyn Transport>,
    credentials: Arc<dyn CredentialSource>,
}

impl AwxClient {
    pub fn new(transport: Arc<dyn Transport>, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    /// Create a job template. Returns the created template as AWX reports it.
    pub async fn create_job_template(&self, request: &TemplateCreationRequest) -> Result<Value> {
        let payload = build_template_creation_payload(request)?;
        debug!(
            name = %payload.name,
            job_tags = ?payload.job_tags,
            skip_tags = ?payload.skip_tags,
            "creating job template"
        );

        let body = serde_json::to_value(&payload)?;
        let created = self
            .send(ApiRequest::post(JOB_TEMPLATES_ENDPOINT, body))
            .await?;

        info!(id = ?created.get("id"), name = %payload.name, "job template created");
        Ok(created)
    }

    /// Launch a job from a template. Returns the launched job as AWX reports it.
    pub async fn run_job(&self, request: &JobRunRequest) -> Result<Value> {
        let payload = build_job_run_payload(request)?;
        let template_id = payload.template_id;
        debug!(
            template_id,
            job_tags = ?payload.job_tags,
            skip_tags = ?payload.skip_tags,
            "launching job"
        );

        let body = serde_json::to_value(&payload)?;
        let job = self
            .send(ApiRequest::post(launch_endpoint(template_id), body))
            .await?;

        info!(template_id, job_id = ?job.get("job").or_else(|| job.get("id")), "job launched");
        Ok(job)
    }

    /// Fetch a job's current state.
    pub async fn get_job(&self, job_id: u64) -> Result<Value> {
        self.send(ApiRequest::get(format!("/api/v2/jobs/{job_id}/")))
            .await
    }

    /// List job templates, optionally filtered by AWX's `search` parameter.
    pub async fn list_job_templates(&self, search: Option<&str>) -> Result<Value> {
        let endpoint = match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => {
                let query: String = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("search", term)
                    .finish();
                format!("{JOB_TEMPLATES_ENDPOINT}?{query}")
            }
            None => JOB_TEMPLATES_ENDPOINT.to_string(),
        };
        self.send(ApiRequest::get(endpoint)).await
    }

    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let token = self.credentials.token().await?;
        let method = request.method;
        let endpoint = request.endpoint.clone();
        self.transport.send(request, &token).await.map_err(|e| {
            warn!(%method, %endpoint, error = %e, "AWX call failed");
            AwxError::from(e)
        })
    }
}

fn launch_endpoint(template_id: u64) -> String {
    format!("{JOB_TEMPLATES_ENDPOINT}{template_id}/launch/")
}
