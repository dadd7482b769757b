use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::errors::DomainError;

/// Errors that can occur when fetching issues from GitHub
#[derive(Error, Debug)]
pub enum GitHubError {
    /// The request could not be sent or the body could not be read
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// GitHub answered with a non-success status
    #[error("GitHub returned {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    /// The body was not a JSON array of issues
    #[error("Failed to decode issue list: {0}")]
    DecodeError(#[from] serde_json::Error),
}

impl From<GitHubError> for DomainError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::DecodeError(_) => DomainError::InvalidSourcePayload(err.to_string()),
            GitHubError::NetworkError(_) | GitHubError::UnexpectedStatus { .. } => {
                DomainError::SourceUnavailable(err.to_string())
            }
        }
    }
}
