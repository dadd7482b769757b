//! Opening the SQLite pool behind the relational store.
//!
//! A run issues one statement at a time, so every pool holds a single
//! connection.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);
const BUSY_TIMEOUT: Duration = Duration::from_secs(30);
const MEMORY_URL: &str = "sqlite::memory:";

#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("Invalid database URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("Failed to create database directory {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to open database: {0}")]
    Open(#[source] sqlx::Error),
}

/// Open the database at `database_url`, creating the file and its parent
/// directory when they do not exist yet.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, ConnectionError> {
    let options = parse_url(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    if let Some(path) = missing_parent_directory(database_url) {
        std::fs::create_dir_all(&path).map_err(|source| ConnectionError::Directory { path, source })?;
    }

    open(options).await
}

/// Private in-memory database, gone when the pool is dropped.
pub async fn create_test_pool() -> Result<SqlitePool, ConnectionError> {
    open(parse_url(MEMORY_URL)?.shared_cache(true)).await
}

fn parse_url(database_url: &str) -> Result<SqliteConnectOptions, ConnectionError> {
    SqliteConnectOptions::from_str(database_url).map_err(|source| ConnectionError::InvalidUrl {
        url: database_url.to_string(),
        source,
    })
}

async fn open(options: SqliteConnectOptions) -> Result<SqlitePool, ConnectionError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await
        .map_err(ConnectionError::Open)?;

    sqlx::query("SELECT 1").execute(&pool).await.map_err(ConnectionError::Open)?;
    Ok(pool)
}

/// Parent directory of the database file, if it still has to be created.
fn missing_parent_directory(database_url: &str) -> Option<PathBuf> {
    let file = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    let file = file.split('?').next().unwrap_or_default();
    if file.is_empty() || file == ":memory:" {
        return None;
    }

    Path::new(file)
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty() && !dir.exists())
        .map(Path::to_path_buf)
}
