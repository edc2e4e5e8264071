//! API error types for the Jenkins client.

use reqwest::StatusCode;
use thiserror::Error;

/// Message carried by [`JenkinsError::NotFound`].
pub const NOT_FOUND_MESSAGE: &str = "Requested item could not be found";

/// Errors that can occur when interacting with the Jenkins API.
#[derive(Debug, Error)]
pub enum JenkinsError {
    /// The requested job or build does not exist (HTTP 404).
    #[error("{0}")]
    NotFound(String),

    /// Authentication or server-side failure (HTTP 401, 403 or 500).
    #[error("{message}")]
    Client {
        /// The HTTP status returned by the server.
        status: StatusCode,
        /// Human readable description including the status code.
        message: String,
    },

    /// Any other HTTP or network failure, passed through from reqwest unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A successful response whose body is not valid JSON.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// A key expected in a response payload is missing.
    #[error("Missing field in response: {0}")]
    MissingField(String),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, JenkinsError>;

impl JenkinsError {
    /// Map an HTTP status onto the client error taxonomy.
    ///
    /// Returns `None` for statuses that are not remapped; the caller is then
    /// expected to surface the transport error as-is.
    pub fn from_status(status: StatusCode) -> Option<Self> {
        match status.as_u16() {
            404 => Some(JenkinsError::NotFound(NOT_FOUND_MESSAGE.to_string())),
            401 | 403 | 500 => Some(JenkinsError::Client {
                status,
                message: format!(
                    "Error in request. Possibly authentication failed [{}]: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            }),
            _ => None,
        }
    }

    /// Whether this is the not-found case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, JenkinsError::NotFound(_))
    }

    /// Whether this error belongs to the client error family.
    ///
    /// Not-found is a specialisation of the general client error, so both
    /// `NotFound` and `Client` report `true`.
    pub fn is_client_error(&self) -> bool {
        matches!(self, JenkinsError::NotFound(_) | JenkinsError::Client { .. })
    }

    /// The HTTP status behind this error, if there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            JenkinsError::NotFound(_) => Some(StatusCode::NOT_FOUND),
            JenkinsError::Client { status, .. } => Some(*status),
            JenkinsError::Transport(e) => e.status(),
            _ => None,
        }
    }
}
