//! Error types for jenkins-async.
//!
//! Aggregates configuration and API failures behind one type for callers
//! that load a client from a file and then talk to the server.

use thiserror::Error;

use crate::api::error::JenkinsError;
use crate::config::ConfigError;

/// The crate-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// API-related errors.
    #[error("{0}")]
    Api(#[from] JenkinsError),
}

impl Error {
    /// Check if this error is recoverable by caller logic.
    ///
    /// Missing jobs or builds and transport failures may succeed on a later
    /// attempt; configuration and authentication problems will not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Api(JenkinsError::NotFound(_)) | Error::Api(JenkinsError::Transport(_))
        )
    }
}

/// Result type for crate-level operations.
pub type Result<T> = std::result::Result<T, Error>;
