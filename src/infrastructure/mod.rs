//! Infrastructure layer module
//!
//! External integrations and ambient plumbing:
//! - GitHub issue listing
//! - Twitter status updates with OAuth 1.0a signing
//! - Configuration management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod github;
pub mod logging;
pub mod twitter;
