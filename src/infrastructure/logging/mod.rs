//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - stderr output in json, pretty or compact form
//! - optional daily rotated JSON log files

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat};
pub use logger::Logger;
