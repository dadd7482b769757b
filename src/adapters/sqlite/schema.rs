//! The `seen_issues` table.

use sqlx::SqlitePool;
use thiserror::Error;
use tracing::debug;

const SEEN_ISSUES_DDL: &str = include_str!("seen_issues.sql");

#[derive(Debug, Error)]
#[error("Failed to create seen_issues table: {0}")]
pub struct SchemaError(#[from] sqlx::Error);

/// Create the `seen_issues` table unless it already exists.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), SchemaError> {
    sqlx::query(SEEN_ISSUES_DDL).execute(pool).await?;
    debug!("seen_issues table ready");
    Ok(())
}
