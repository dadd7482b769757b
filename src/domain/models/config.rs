use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Main configuration structure for the issues bot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Where issues are fetched from
    #[serde(default)]
    pub source: SourceConfig,

    /// Status update endpoint
    #[serde(default)]
    pub twitter: TwitterConfig,

    /// OAuth 1.0a credentials used to sign status updates
    #[serde(default)]
    pub credentials: Credentials,

    /// Known-issue store configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Announcement text configuration
    #[serde(default)]
    pub status: StatusConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// GitHub issue source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SourceConfig {
    /// Base URL of the GitHub REST API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Repository owner
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Repository name
    #[serde(default = "default_repo")]
    pub repo: String,

    /// User-Agent header sent to GitHub
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_owner() -> String {
    "vim-jp".to_string()
}

fn default_repo() -> String {
    "issues".to_string()
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl SourceConfig {
    /// Full URL of the issue listing, including closed issues.
    pub fn issues_url(&self) -> String {
        format!(
            "{base}/repos/{owner}/{repo}/issues?state=all",
            base = self.api_base_url.trim_end_matches('/'),
            owner = self.owner,
            repo = self.repo
        )
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            owner: default_owner(),
            repo: default_repo(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Status update endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TwitterConfig {
    /// Endpoint receiving the signed `status` form
    #[serde(default = "default_update_url")]
    pub update_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_update_url() -> String {
    "https://api.twitter.com/1.1/statuses/update.json".to_string()
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            update_url: default_update_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// OAuth 1.0a consumer and access token pairs
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Credentials {
    #[serde(default)]
    pub client_token: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub access_secret: String,
}

impl Credentials {
    /// Names of the credential fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("client_token", &self.client_token),
            ("client_secret", &self.client_secret),
            ("access_token", &self.access_token),
            ("access_secret", &self.access_secret),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_token", &self.client_token)
            .field("client_secret", &"[REDACTED]")
            .field("access_token", &self.access_token)
            .field("access_secret", &"[REDACTED]")
            .finish()
    }
}

/// Which known-issue store backs a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Relational table keyed by issue id
    #[default]
    Sqlite,
    /// Pretty-printed JSON array of issues
    File,
}

/// Known-issue store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Database connection string for the relational store
    #[serde(default = "default_dsn")]
    pub dsn: String,

    /// Snapshot path for the file store
    #[serde(default = "default_issues_file")]
    pub issues_file: PathBuf,
}

fn default_dsn() -> String {
    "sqlite:issues.db".to_string()
}

fn default_issues_file() -> PathBuf {
    PathBuf::from("issues.json")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            dsn: default_dsn(),
            issues_file: default_issues_file(),
        }
    }
}

/// Announcement text configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StatusConfig {
    /// Tag appended to every status
    #[serde(default = "default_hashtag")]
    pub hashtag: String,

    /// Maximum status length in Unicode code points
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

fn default_hashtag() -> String {
    "#vimeditor".to_string()
}

const fn default_max_chars() -> usize {
    140
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            hashtag: default_hashtag(),
            max_chars: default_max_chars(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json, pretty or compact
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for daily-rotated log files; stderr only when unset
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issues_url() {
        let source = SourceConfig::default();
        assert_eq!(
            source.issues_url(),
            "https://api.github.com/repos/vim-jp/issues/issues?state=all"
        );

        let source = SourceConfig {
            api_base_url: "http://127.0.0.1:1234/".to_string(),
            owner: "octo".to_string(),
            repo: "cat".to_string(),
            ..SourceConfig::default()
        };
        assert_eq!(
            source.issues_url(),
            "http://127.0.0.1:1234/repos/octo/cat/issues?state=all"
        );
    }

    #[test]
    fn test_credentials_debug_redacts_secrets() {
        let creds = Credentials {
            client_token: "ck".to_string(),
            client_secret: "very-secret-consumer".to_string(),
            access_token: "at".to_string(),
            access_secret: "very-secret-access".to_string(),
        };
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("very-secret-consumer"));
        assert!(!rendered.contains("very-secret-access"));
        assert!(rendered.contains("ck"));
    }

    #[test]
    fn test_missing_fields() {
        let creds = Credentials {
            client_token: "ck".to_string(),
            access_secret: "as".to_string(),
            ..Credentials::default()
        };
        assert_eq!(creds.missing_fields(), vec!["client_secret", "access_token"]);
        assert!(Credentials {
            client_token: "a".into(),
            client_secret: "b".into(),
            access_token: "c".into(),
            access_secret: "d".into(),
        }
        .missing_fields()
        .is_empty());
    }

    #[test]
    fn test_backend_deserializes_lowercase() {
        let store: StoreConfig = serde_json::from_str(r#"{"backend": "file"}"#).unwrap();
        assert_eq!(store.backend, StoreBackend::File);
        assert_eq!(store.issues_file, PathBuf::from("issues.json"));
        assert_eq!(store.dsn, "sqlite:issues.db");
    }
}
