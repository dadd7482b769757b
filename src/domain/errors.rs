//! Domain errors for the issues bot.

use thiserror::Error;

/// Domain-level errors that can occur while fetching, recording or announcing issues.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Issue source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Invalid issue payload: {0}")]
    InvalidSourcePayload(String),

    #[error("Announcement failed: {0}")]
    AnnouncementFailed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::StorageError(err.to_string())
    }
}
