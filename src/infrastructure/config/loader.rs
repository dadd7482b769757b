use anyhow::{Context, Result};
use figment::providers::{Env, Format, Json, Serialized, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::models::config::{Config, StoreBackend};

/// Prefix for environment variable overrides, e.g. `VIM_JP_ISSUES_BOT_STORE__DSN`.
pub const ENV_PREFIX: &str = "VIM_JP_ISSUES_BOT_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Repository owner and name cannot be empty")]
    EmptyRepository,

    #[error("Database connection string cannot be empty")]
    EmptyDsn,

    #[error("Issues file path cannot be empty")]
    EmptyIssuesFile,

    #[error("Invalid max_chars: {0}. Must be at least 1")]
    InvalidMaxChars(usize),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty, compact")]
    InvalidLogFormat(String),

    #[error("Missing credentials: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),
}

/// Values given on the command line. Set fields win over every other source.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub backend: Option<StoreBackend>,
    pub dsn: Option<String>,
    pub issues_file: Option<PathBuf>,
    pub client_token: Option<String>,
    pub client_secret: Option<String>,
    pub access_token: Option<String>,
    pub access_secret: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut Config) {
        if let Some(backend) = self.backend {
            config.store.backend = backend;
        }
        if let Some(dsn) = self.dsn {
            config.store.dsn = dsn;
        }
        if let Some(issues_file) = self.issues_file {
            config.store.issues_file = issues_file;
        }

        let credentials = &mut config.credentials;
        for (slot, value) in [
            (&mut credentials.client_token, self.client_token),
            (&mut credentials.client_secret, self.client_secret),
            (&mut credentials.access_token, self.access_token),
            (&mut credentials.access_secret, self.access_secret),
        ] {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. Config file at `path` (JSON, or YAML for `.yaml`/`.yml`; optional)
    /// 3. Environment variables (`VIM_JP_ISSUES_BOT_*`, `__` separates sections)
    /// 4. Command line overrides
    pub fn load(path: impl AsRef<Path>, overrides: ConfigOverrides) -> Result<Config> {
        let path = path.as_ref();
        let mut config = Self::figment(path)
            .extract::<Config>()
            .context(format!("Failed to load config from {}", path.display()))?;

        overrides.apply(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    fn figment(path: &Path) -> Figment {
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        let figment = if is_yaml {
            figment.merge(Yaml::file(path))
        } else {
            figment.merge(Json::file(path))
        };

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.source.owner.is_empty() || config.source.repo.is_empty() {
            return Err(ConfigError::EmptyRepository);
        }

        match config.store.backend {
            StoreBackend::Sqlite if config.store.dsn.is_empty() => return Err(ConfigError::EmptyDsn),
            StoreBackend::File if config.store.issues_file.as_os_str().is_empty() => {
                return Err(ConfigError::EmptyIssuesFile)
            }
            _ => {}
        }

        if config.status.max_chars == 0 {
            return Err(ConfigError::InvalidMaxChars(config.status.max_chars));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty", "compact"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }

    /// Posting needs the full credential set; silent and dry runs do not.
    pub fn validate_credentials(config: &Config) -> Result<(), ConfigError> {
        let missing = config.credentials.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingCredentials(missing))
        }
    }
}
