//! Failure taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. The `Display` text of each
//! variant is exactly what the UI shows after its `Login failed: ` or
//! `Registration failed: ` prefix, so callers never assemble messages
//! themselves.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::de::DeserializeOwned;

use super::types::ErrorBody;

pub const STATUS_UNAUTHORIZED: u16 = 401;

/// Errors produced by auth endpoint calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-success response carrying a detail message from the backend.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    /// Non-success response without a usable detail message.
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// The request never completed.
    #[error("{0}")]
    Network(String),

    /// A success response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Parse(String),
}

impl ApiError {
    /// Classify a non-success response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message());
        match detail {
            Some(detail) => Self::Rejected { status, detail },
            None => Self::Status { status },
        }
    }

    /// HTTP status, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } | Self::Status { status } => Some(*status),
            Self::Network(_) | Self::Parse(_) => None,
        }
    }

    /// Whether the backend rejected the bearer credential.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(STATUS_UNAUTHORIZED)
    }
}

/// Decode a completed response: 2xx bodies parse into `T`, anything else is
/// classified through [`ApiError::from_response`].
///
/// # Errors
///
/// Returns [`ApiError::Parse`] for a malformed success body, and a rejected
/// variant for non-2xx statuses.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}
