// @awa-component: AWX-PayloadBuilder
//
//! Request types and their AWX wire payloads.
//!
//! Request structs hold what the caller supplied, with every optional input
//! modelled as `Option`. The `build_*` functions apply defaults, validate,
//! and produce payload structs whose tag fields are `Option<String>`, so a
//! list can never reach the wire in their place.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{AwxError, Result};
use crate::tags::normalize_tag_filter;

/// Arguments for creating a job template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateCreationRequest {
    pub name: Option<String>,
    pub project_id: Option<u64>,
    pub inventory_id: Option<u64>,
    /// Playbook path relative to the project root.
    pub playbook: Option<String>,
    pub include_tags: Option<Vec<String>>,
    pub exclude_tags: Option<Vec<String>>,
    pub description: Option<String>,
    /// Host pattern stored on the template.
    pub limit: Option<String>,
    /// Allow `job_tags` to be overridden at launch time.
    pub ask_tags_on_launch: Option<bool>,
    /// Allow `extra_vars` to be supplied at launch time.
    pub ask_variables_on_launch: Option<bool>,
}

/// Arguments for launching a job from a template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobRunRequest {
    pub template_id: Option<u64>,
    pub extra_vars: Option<Map<String, Value>>,
    /// Overrides the template's stored `job_tags` for this run only.
    pub include_tags: Option<Vec<String>>,
    /// Overrides the template's stored `skip_tags` for this run only.
    pub exclude_tags: Option<Vec<String>>,
    pub limit: Option<String>,
}

/// Body of `POST /api/v2/job_templates/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobTemplatePayload {
    pub name: String,
    pub project: u64,
    pub inventory: u64,
    pub playbook: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ask_tags_on_launch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ask_variables_on_launch: Option<bool>,
}

/// Body of `POST /api/v2/job_templates/{id}/launch/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobLaunchPayload {
    /// Template to launch. Part of the endpoint, not the body.
    #[serde(skip)]
    pub template_id: u64,
    /// Always serialized; an empty object means "no extra variables".
    pub extra_vars: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
}

/// Validate a template creation request and build its payload.
///
/// Required fields are checked in the order `name`, `project_id`,
/// `inventory_id`, `playbook`; the first one missing is reported.
pub fn build_template_creation_payload(
    request: &TemplateCreationRequest,
) -> Result<JobTemplatePayload> {
    let name = required_str(request.name.as_deref(), "name")?;
    let project = request.project_id.ok_or(AwxError::MissingField("project_id"))?;
    let inventory = request
        .inventory_id
        .ok_or(AwxError::MissingField("inventory_id"))?;
    let playbook = required_str(request.playbook.as_deref(), "playbook")?;

    let job_tags = normalize_tag_filter(request.include_tags.as_deref())?;
    let skip_tags = normalize_tag_filter(request.exclude_tags.as_deref())?;

    Ok(JobTemplatePayload {
        name: name.to_string(),
        project,
        inventory,
        playbook: playbook.to_string(),
        job_tags,
        skip_tags,
        description: non_empty(request.description.as_deref()),
        limit: non_empty(request.limit.as_deref()),
        ask_tags_on_launch: request.ask_tags_on_launch,
        ask_variables_on_launch: request.ask_variables_on_launch,
    })
}

/// Validate a launch request and build its payload.
///
/// Tag overrides are sent exactly as the caller gave them; combining them
/// with the template's stored filter is left to AWX.
pub fn build_job_run_payload(request: &JobRunRequest) -> Result<JobLaunchPayload> {
    // Checked first so a missing template is reported even with bad tags.
    let template_id = request
        .template_id
        .ok_or(AwxError::MissingField("template_id"))?;

    let job_tags = normalize_tag_filter(request.include_tags.as_deref())?;
    let skip_tags = normalize_tag_filter(request.exclude_tags.as_deref())?;

    Ok(JobLaunchPayload {
        template_id,
        extra_vars: request.extra_vars.clone().unwrap_or_default(),
        job_tags,
        skip_tags,
        limit: non_empty(request.limit.as_deref()),
    })
}

fn required_str<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AwxError::MissingField(field)),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn template_request() -> TemplateCreationRequest {
        TemplateCreationRequest {
            name: Some("Talos bootstrap".into()),
            project_id: Some(7),
            inventory_id: Some(3),
            playbook: Some("playbooks/talos.yml".into()),
            ..Default::default()
        }
    }

    #[test]
    fn template_payload_with_include_tags_only() {
        let request = TemplateCreationRequest {
            include_tags: Some(vec!["talos-cluster".into()]),
            exclude_tags: Some(vec![]),
            ..template_request()
        };

        let payload = build_template_creation_payload(&request).unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["job_tags"], "talos-cluster");
        assert!(json.get("skip_tags").is_none());
        assert_eq!(json["project"], 7);
        assert_eq!(json["inventory"], 3);
        assert_eq!(json["playbook"], "playbooks/talos.yml");
    }

    #[test]
    fn template_payload_omits_absent_optionals() {
        let payload = build_template_creation_payload(&template_request()).unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            json!({
                "name": "Talos bootstrap",
                "project": 7,
                "inventory": 3,
                "playbook": "playbooks/talos.yml",
            })
        );
    }

    #[test]
    fn template_payload_carries_both_filters_and_extras() {
        let request = TemplateCreationRequest {
            include_tags: Some(vec!["talos-cluster".into(), "validate".into()]),
            exclude_tags: Some(vec!["slow".into()]),
            description: Some("  ".into()),
            limit: Some("control-plane".into()),
            ask_tags_on_launch: Some(true),
            ..template_request()
        };

        let json = serde_json::to_value(build_template_creation_payload(&request).unwrap()).unwrap();

        assert_eq!(json["job_tags"], "talos-cluster,validate");
        assert_eq!(json["skip_tags"], "slow");
        assert_eq!(json["limit"], "control-plane");
        assert_eq!(json["ask_tags_on_launch"], true);
        assert!(json.get("description").is_none());
        assert!(json.get("ask_variables_on_launch").is_none());
    }

    #[test]
    fn missing_fields_are_reported_in_fixed_order() {
        let empty = TemplateCreationRequest::default();
        assert!(matches!(
            build_template_creation_payload(&empty),
            Err(AwxError::MissingField("name"))
        ));

        let request = TemplateCreationRequest {
            name: Some("x".into()),
            playbook: Some("site.yml".into()),
            ..Default::default()
        };
        assert!(matches!(
            build_template_creation_payload(&request),
            Err(AwxError::MissingField("project_id"))
        ));

        let request = TemplateCreationRequest {
            inventory_id: None,
            ..template_request()
        };
        assert!(matches!(
            build_template_creation_payload(&request),
            Err(AwxError::MissingField("inventory_id"))
        ));

        let request = TemplateCreationRequest {
            playbook: Some("   ".into()),
            ..template_request()
        };
        assert!(matches!(
            build_template_creation_payload(&request),
            Err(AwxError::MissingField("playbook"))
        ));
    }

    #[test]
    fn blank_name_counts_as_missing() {
        let request = TemplateCreationRequest {
            name: Some(String::new()),
            ..template_request()
        };
        assert!(matches!(
            build_template_creation_payload(&request),
            Err(AwxError::MissingField("name"))
        ));
    }

    #[test]
    fn invalid_exclude_tag_fails_whole_template() {
        let request = TemplateCreationRequest {
            include_tags: Some(vec!["ok".into()]),
            exclude_tags: Some(vec!["bad,tag".into()]),
            ..template_request()
        };
        assert!(matches!(
            build_template_creation_payload(&request),
            Err(AwxError::InvalidTag { .. })
        ));
    }

    #[test]
    fn equal_requests_build_equal_payloads() {
        let request = TemplateCreationRequest {
            include_tags: Some(vec!["a".into(), "b".into()]),
            ..template_request()
        };
        assert_eq!(
            build_template_creation_payload(&request).unwrap(),
            build_template_creation_payload(&request.clone()).unwrap()
        );
    }

    #[test]
    fn run_payload_defaults_to_empty_extra_vars_and_no_tags() {
        let request = JobRunRequest {
            template_id: Some(42),
            ..Default::default()
        };

        let json = serde_json::to_value(build_job_run_payload(&request).unwrap()).unwrap();

        assert_eq!(json, json!({ "extra_vars": {} }));
    }

    #[test]
    fn run_payload_empty_override_is_treated_as_absent() {
        let request = JobRunRequest {
            template_id: Some(42),
            include_tags: Some(vec![]),
            exclude_tags: Some(vec![]),
            limit: Some(String::new()),
            ..Default::default()
        };

        let json = serde_json::to_value(build_job_run_payload(&request).unwrap()).unwrap();

        assert_eq!(json, json!({ "extra_vars": {} }));
    }

    #[test]
    fn run_payload_passes_override_and_vars_through() {
        let mut vars = Map::new();
        vars.insert("cluster".into(), json!("lab"));
        vars.insert("nodes".into(), json!({ "count": 3 }));

        let request = JobRunRequest {
            template_id: Some(42),
            extra_vars: Some(vars),
            include_tags: Some(vec!["validate".into()]),
            exclude_tags: Some(vec!["reboot".into(), "wipe".into()]),
            limit: Some("worker-*".into()),
        };

        let payload = build_job_run_payload(&request).unwrap();
        assert_eq!(payload.template_id, 42);
        let json = serde_json::to_value(payload).unwrap();

        assert!(json.get("template_id").is_none());
        assert_eq!(json["job_tags"], "validate");
        assert_eq!(json["skip_tags"], "reboot,wipe");
        assert_eq!(json["limit"], "worker-*");
        assert_eq!(json["extra_vars"]["cluster"], "lab");
        assert_eq!(json["extra_vars"]["nodes"]["count"], 3);
    }

    #[test]
    fn run_payload_requires_template_id() {
        let request = JobRunRequest {
            include_tags: Some(vec!["bad,tag".into()]),
            ..Default::default()
        };
        assert!(matches!(
            build_job_run_payload(&request),
            Err(AwxError::MissingField("template_id"))
        ));
    }
}
