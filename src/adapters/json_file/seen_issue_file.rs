//! JSON snapshot implementation of the SeenIssueStore.
//!
//! The whole file is read once when the store is opened. New issues are
//! appended in memory and the full array is rewritten by `persist`, but only
//! when at least one issue was inserted since the store was opened.
//!
//! A missing snapshot is an error for [`JsonFileSeenIssueStore::open`]: a
//! wrong path would otherwise look like an empty store and every fetched
//! issue would be announced again. [`JsonFileSeenIssueStore::open_or_empty`]
//! accepts a missing file and is meant for bootstrapping a new snapshot.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Issue, SeenRecord};
use crate::domain::ports::{InsertOutcome, SeenIssueStore};

pub struct JsonFileSeenIssueStore {
    path: PathBuf,
    issues: Vec<Issue>,
    dirty: bool,
}

impl JsonFileSeenIssueStore {
    /// Load the existing snapshot at `path`.
    pub async fn open(path: impl Into<PathBuf>) -> DomainResult<Self> {
        Self::load(path.into(), false).await
    }

    /// Load the snapshot at `path`, treating a missing file as an empty store.
    pub async fn open_or_empty(path: impl Into<PathBuf>) -> DomainResult<Self> {
        Self::load(path.into(), true).await
    }

    async fn load(path: PathBuf, allow_missing: bool) -> DomainResult<Self> {
        let issues = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                DomainError::SerializationError(format!("{}: {e}", path.display()))
            })?,
            Err(e) if allow_missing && e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "snapshot not found, starting empty");
                Vec::new()
            }
            Err(e) => {
                return Err(DomainError::StorageError(format!("{}: {e}", path.display())));
            }
        };

        Ok(Self {
            path,
            issues,
            dirty: false,
        })
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    async fn write_snapshot(&self) -> DomainResult<()> {
        let body = serde_json::to_vec_pretty(&self.issues)?;

        // Write beside the target, then rename over it.
        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        tokio::fs::write(&tmp_path, body).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl SeenIssueStore for JsonFileSeenIssueStore {
    async fn contains(&self, id: i64) -> DomainResult<bool> {
        Ok(self.issues.iter().any(|issue| issue.id == id))
    }

    async fn insert(&mut self, issue: &Issue) -> DomainResult<InsertOutcome> {
        if self.contains(issue.id).await? {
            return Ok(InsertOutcome::AlreadyPresent);
        }
        self.issues.push(issue.clone());
        self.dirty = true;
        Ok(InsertOutcome::Inserted)
    }

    async fn persist(&mut self) -> DomainResult<()> {
        if !self.dirty {
            debug!(path = %self.path.display(), "no new issues, snapshot left untouched");
            return Ok(());
        }

        self.write_snapshot().await?;
        self.dirty = false;
        info!(path = %self.path.display(), count = self.issues.len(), "snapshot written");
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<SeenRecord>> {
        let mut records: Vec<SeenRecord> = self.issues.iter().map(SeenRecord::from).collect();
        records.sort_by_key(|r| r.id);
        Ok(records)
    }
}
