//! Adapters implementing the known-issue store port.

pub mod json_file;
pub mod sqlite;

pub use json_file::JsonFileSeenIssueStore;
pub use sqlite::SqliteSeenIssueRepository;
