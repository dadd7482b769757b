//! Port trait definitions (Hexagonal Architecture)
//!
//! Async trait interfaces that infrastructure adapters implement:
//! - IssueSource: fetches the current issue list
//! - SeenIssueStore: remembers which issues were already announced
//! - Announcer: posts a status update
//!
//! The announce service depends only on these traits, so a new store or
//! client can be added without touching the diff logic.

pub mod announcer;
pub mod issue_source;
pub mod seen_issue_store;

pub use announcer::Announcer;
pub use issue_source::IssueSource;
pub use seen_issue_store::{InsertOutcome, SeenIssueStore};
