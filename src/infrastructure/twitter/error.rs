use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::errors::DomainError;

/// Errors that can occur when posting a status update
#[derive(Error, Debug)]
pub enum TwitterError {
    /// The request could not be sent
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Anything other than 200 OK
    #[error("Status update rejected with {status}: {body}")]
    Rejected { status: StatusCode, body: String },

    /// The HMAC key could not be initialised
    #[error("Failed to sign request: {0}")]
    SigningFailed(String),
}

impl From<TwitterError> for DomainError {
    fn from(err: TwitterError) -> Self {
        DomainError::AnnouncementFailed(err.to_string())
    }
}
