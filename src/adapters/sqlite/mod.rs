//! SQLite adapter for the known-issue store.

pub mod connection;
pub mod schema;
pub mod seen_issue_repository;

pub use connection::{create_pool, create_test_pool, ConnectionError};
pub use schema::{ensure_schema, SchemaError};
pub use seen_issue_repository::SqliteSeenIssueRepository;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::errors::{DomainError, DomainResult};

/// Parse an RFC3339 datetime string from a SQLite row field.
pub fn parse_datetime(s: &str) -> DomainResult<DateTime<Utc>> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| DomainError::SerializationError(e.to_string()))
        .map(|dt| dt.with_timezone(&Utc))
}

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

/// Open the database at `database_url` and create the schema if it is missing.
pub async fn initialize_database(database_url: &str) -> Result<SqlitePool, DatabaseError> {
    let pool = create_pool(database_url).await?;
    ensure_schema(&pool).await?;
    Ok(pool)
}

/// Create an in-memory test pool with the schema in place.
pub async fn create_store_test_pool() -> Result<SqlitePool, DatabaseError> {
    let pool = create_test_pool().await?;
    ensure_schema(&pool).await?;
    Ok(pool)
}
