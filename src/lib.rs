//! vim-jp-issues-bot - announce new GitHub issues on Twitter
//!
//! Each run fetches the issue list of one repository, diffs it against a
//! store of issues that were already announced, posts one status update per
//! new issue (oldest first) and records it so it is never announced twice.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, errors and the port traits
//! - **Service Layer** (`services`): the diff-and-announce cycle and status rendering
//! - **Adapters** (`adapters`): SQLite and JSON-file implementations of the store port
//! - **Infrastructure Layer** (`infrastructure`): GitHub and Twitter clients, config, logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use vim_jp_issues_bot::cli::{execute, Cli};
//! use clap::Parser;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     execute(Cli::parse()).await
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::{JsonFileSeenIssueStore, SqliteSeenIssueRepository};
pub use domain::models::{Config, Issue, RunMode, RunSummary, SeenRecord};
pub use domain::ports::{Announcer, InsertOutcome, IssueSource, SeenIssueStore};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{AnnounceService, StatusFormatter};
