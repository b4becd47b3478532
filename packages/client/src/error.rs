//! Error types
//!
//! Defines the single normalized failure shape surfaced by every API
//! operation.

use thiserror::Error;

/// Normalized API failure.
///
/// Every failed call collapses into this shape: the backend-provided
/// human-readable detail when one was returned, otherwise the fixed
/// per-operation fallback message. Transport failures that never produced
/// a response carry `status: None`.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable message for the UI that triggered the call.
    pub message: String,
    /// HTTP status of the rejection, when a response was received.
    pub status: Option<u16>,
}

impl ApiError {
    /// The backend rejected the request with an HTTP status.
    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }

    /// No usable response was received.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }
}
