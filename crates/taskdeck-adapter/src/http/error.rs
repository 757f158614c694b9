/*
[INPUT]:  Error sources (HTTP transport, API status codes, serialization)
[OUTPUT]: Structured error types with context helpers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Taskdeck adapter
#[derive(Error, Debug)]
pub enum TaskdeckError {
    /// HTTP request failed before a response was produced
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-2xx status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl TaskdeckError {
    /// Create an API error from status code and response body
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        TaskdeckError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// HTTP status of the failure, when the service produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            TaskdeckError::Api { status, .. } => Some(*status),
            TaskdeckError::Http(err) => err.status().map(|code| code.as_u16()),
            _ => None,
        }
    }

    /// Whether the service rejected the request as not found
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND.as_u16())
    }
}

/// Result type alias for Taskdeck operations
pub type Result<T> = std::result::Result<T, TaskdeckError>;
