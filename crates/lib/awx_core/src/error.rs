//! Error types for payload construction and remote calls.

use thiserror::Error;

use crate::transport::TransportError;

/// Convenience alias for operations in this crate.
pub type Result<T> = core::result::Result<T, AwxError>;

/// Errors surfaced by the normalizer and the client operations.
///
/// `MissingField` and `InvalidTag` are raised before any network call.
/// `Transport` carries the transport's diagnostic unchanged.
#[derive(Debug, Error)]
pub enum AwxError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid tag {tag:?}: {reason}")]
    InvalidTag { tag: String, reason: &'static str },

    #[error("Payload encode error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),
}

impl AwxError {
    /// True for errors detected locally, before the transport was involved.
    pub fn is_validation(&self) -> bool {
        matches!(self, AwxError::MissingField(_) | AwxError::InvalidTag { .. })
    }
}
