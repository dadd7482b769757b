//! Service layer: the diff-and-announce cycle and status rendering.

pub mod announce_service;
pub mod status_formatter;

pub use announce_service::AnnounceService;
pub use status_formatter::StatusFormatter;
