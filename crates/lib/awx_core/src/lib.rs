//! # awx_core
//!
//! Core logic for driving AWX job templates.
//!
//! Turns caller-supplied arguments into the exact payloads the AWX v2 API
//! expects and hands them to an injected [`transport::Transport`].
//!
//! # Public API
//!
//! - [`tags::normalize_tag_filter`]: ordered tag list to `job_tags` / `skip_tags` string
//! - [`payload::build_template_creation_payload`]: `POST /api/v2/job_templates/` body
//! - [`payload::build_job_run_payload`]: `POST /api/v2/job_templates/{id}/launch/` body
//! - [`client::AwxClient`]: validated operations over a transport and credential source

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod payload;
pub mod tags;
pub mod transport;

pub use error::{AwxError, Result};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
