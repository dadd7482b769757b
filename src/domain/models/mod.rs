pub mod config;
pub mod issue;
pub mod run;

pub use config::{
    Config, Credentials, LoggingConfig, SourceConfig, StatusConfig, StoreBackend, StoreConfig,
    TwitterConfig,
};
pub use issue::{Issue, SeenRecord};
pub use run::{RunMode, RunSummary};
