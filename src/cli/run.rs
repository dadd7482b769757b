use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use super::output::{output, RunOutput, SeenListOutput};
use super::types::Cli;
use crate::adapters::sqlite::initialize_database;
use crate::adapters::{JsonFileSeenIssueStore, SqliteSeenIssueRepository};
use crate::domain::models::{Config, RunMode, RunSummary, StoreBackend};
use crate::domain::ports::SeenIssueStore;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::github::GitHubIssueSource;
use crate::infrastructure::logging::{LogConfig, Logger};
use crate::infrastructure::twitter::TwitterAnnouncer;
use crate::services::{AnnounceService, StatusFormatter};

/// Run the bot once as described by `cli`.
pub async fn execute(cli: Cli) -> Result<()> {
    if cli.show_version {
        println!("{}", version());
        return Ok(());
    }

    let config = ConfigLoader::load(&cli.config, cli.overrides())?;
    let _logger = Logger::init(&LogConfig::from(&config.logging))?;

    if cli.list_seen {
        let store = open_store(&config, RunMode::Dry).await?;
        let records = store.list().await.context("Failed to list stored issues")?;
        output(&SeenListOutput { records }, cli.json);
        return Ok(());
    }

    let mode = cli.run_mode();
    if mode.posts() {
        ConfigLoader::validate_credentials(&config)?;
    }

    let mut store = open_store(&config, mode).await?;
    let summary = run_once(&config, mode, store.as_mut()).await?;
    output(&RunOutput { mode, summary }, cli.json);
    Ok(())
}

/// Version string printed by `-v`.
pub const fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Wire the source, announcer and formatter from `config` and run one cycle.
pub async fn run_once(
    config: &Config,
    mode: RunMode,
    store: &mut dyn SeenIssueStore,
) -> Result<RunSummary> {
    let source = GitHubIssueSource::new(&config.source).context("Failed to build GitHub client")?;
    let announcer = TwitterAnnouncer::new(&config.twitter, config.credentials.clone())
        .context("Failed to build Twitter client")?;

    let service = AnnounceService::new(
        Arc::new(source),
        Arc::new(announcer),
        StatusFormatter::from_config(&config.status),
        mode,
    );

    service
        .run(store)
        .await
        .with_context(|| format!("Run against {} failed", config.source.issues_url()))
}

/// Open the configured known-issue store for a run in `mode`.
///
/// The file store must already exist, except in `Silent` mode, which may
/// create it. That lets `--skip` seed a new snapshot without announcing the
/// backlog.
pub async fn open_store(config: &Config, mode: RunMode) -> Result<Box<dyn SeenIssueStore>> {
    match config.store.backend {
        StoreBackend::Sqlite => {
            let pool = initialize_database(&config.store.dsn)
                .await
                .with_context(|| format!("Failed to open database {}", config.store.dsn))?;
            info!(dsn = %config.store.dsn, "using sqlite store");
            Ok(Box::new(SqliteSeenIssueRepository::new(pool)))
        }
        StoreBackend::File => {
            let path = &config.store.issues_file;
            let store = if mode == RunMode::Silent {
                JsonFileSeenIssueStore::open_or_empty(path)
                    .await
                    .with_context(|| format!("Failed to open issues file {}", path.display()))?
            } else {
                JsonFileSeenIssueStore::open(path).await.with_context(|| {
                    format!(
                        "Failed to open issues file {} (run once with --skip to create it)",
                        path.display()
                    )
                })?
            };
            info!(path = %path.display(), "using file store");
            Ok(Box::new(store))
        }
    }
}
