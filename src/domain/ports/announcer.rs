//! Announcer port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;

/// Publishes a rendered status line.
#[async_trait]
pub trait Announcer: Send + Sync {
    async fn post(&self, status: &str) -> DomainResult<()>;
}
