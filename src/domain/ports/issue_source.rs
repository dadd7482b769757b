//! Issue source port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::Issue;

/// Provides the current issue list of the watched repository.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Fetch every issue on the first page, in the order the source returns them
    /// (newest first for GitHub).
    async fn fetch(&self) -> DomainResult<Vec<Issue>>;
}
