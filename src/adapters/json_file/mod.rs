//! JSON snapshot adapter for the known-issue store.

pub mod seen_issue_file;

pub use seen_issue_file::JsonFileSeenIssueStore;
