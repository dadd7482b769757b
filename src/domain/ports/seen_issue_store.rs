//! Known-issue store port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Issue, SeenRecord};

/// Result of recording an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// First time this identifier was recorded.
    Inserted,
    /// The identifier was already known; nothing changed.
    AlreadyPresent,
}

/// Repository interface for already-announced issues.
///
/// Identifiers are unique within a store. Re-inserting a known identifier
/// yields [`InsertOutcome::AlreadyPresent`], never an error. Stores do not
/// lock against concurrent runs.
#[async_trait]
pub trait SeenIssueStore: Send + Sync {
    /// Check whether an issue id has already been recorded.
    async fn contains(&self, id: i64) -> DomainResult<bool>;

    /// Record an issue as seen.
    async fn insert(&mut self, issue: &Issue) -> DomainResult<InsertOutcome>;

    /// Make everything recorded so far durable.
    async fn persist(&mut self) -> DomainResult<()>;

    /// List every recorded issue, ordered by id.
    async fn list(&self) -> DomainResult<Vec<SeenRecord>>;
}
