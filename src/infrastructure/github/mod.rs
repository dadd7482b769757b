//! GitHub issue source.

pub mod client;
pub mod error;

pub use client::GitHubIssueSource;
pub use error::GitHubError;
