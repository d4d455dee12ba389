//! Tool parameter types for the AWX MCP tools.

pub mod jobs;
pub mod templates;
