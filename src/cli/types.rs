use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::domain::models::{RunMode, StoreBackend};
use crate::infrastructure::config::ConfigOverrides;

#[derive(Parser, Debug)]
#[command(name = "vim-jp-issues-bot")]
#[command(about = "Announce new vim-jp issues on Twitter", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version and exit
    #[arg(short = 'v', long = "version")]
    pub show_version: bool,

    /// Known-issue store to use
    #[arg(long, value_enum)]
    pub store: Option<StoreBackendArg>,

    /// Database connection string for the sqlite store
    #[arg(long, env = "VIM_JP_ISSUES_BOT_DSN")]
    pub dsn: Option<String>,

    /// Path of the JSON file store
    #[arg(long)]
    pub issues_file: Option<PathBuf>,

    /// Configuration file (JSON, or YAML by extension)
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// OAuth consumer key
    #[arg(long, env = "VIM_JP_ISSUES_BOT_CLIENT_TOKEN", hide_env_values = true)]
    pub client_token: Option<String>,

    /// OAuth consumer secret
    #[arg(long, env = "VIM_JP_ISSUES_BOT_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// OAuth access token
    #[arg(long, env = "VIM_JP_ISSUES_BOT_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// OAuth access token secret
    #[arg(long, env = "VIM_JP_ISSUES_BOT_ACCESS_SECRET", hide_env_values = true)]
    pub access_secret: Option<String>,

    /// Record new issues as seen without posting them
    #[arg(long, conflicts_with = "dry_run")]
    pub skip: bool,

    /// Report what would be posted; neither post nor record anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the issues already in the store and exit
    #[arg(long)]
    pub list_seen: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreBackendArg {
    Sqlite,
    File,
}

impl From<StoreBackendArg> for StoreBackend {
    fn from(arg: StoreBackendArg) -> Self {
        match arg {
            StoreBackendArg::Sqlite => Self::Sqlite,
            StoreBackendArg::File => Self::File,
        }
    }
}

impl Cli {
    pub fn run_mode(&self) -> RunMode {
        if self.dry_run {
            RunMode::Dry
        } else if self.skip {
            RunMode::Silent
        } else {
            RunMode::Live
        }
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            backend: self.store.map(Into::into),
            dsn: self.dsn.clone(),
            issues_file: self.issues_file.clone(),
            client_token: self.client_token.clone(),
            client_secret: self.client_secret.clone(),
            access_token: self.access_token.clone(),
            access_secret: self.access_secret.clone(),
        }
    }
}
