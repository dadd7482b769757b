//! Common test utilities for integration tests
//!
//! Shared fixtures for driving full runs against mocked GitHub and Twitter
//! endpoints.

#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use std::path::Path;
use tempfile::TempDir;

use vim_jp_issues_bot::domain::models::{Config, Credentials, StoreBackend};

pub const UPDATE_PATH: &str = "/1.1/statuses/update.json";
pub const ISSUES_PATH: &str = "/repos/vim-jp/issues/issues";

/// Create a temporary directory for test isolation
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Config pointing both HTTP clients at `server`, with dummy credentials.
pub fn config_for(server: &ServerGuard) -> Config {
    let mut config = Config::default();
    config.source.api_base_url = server.url();
    config.twitter.update_url = format!("{}{UPDATE_PATH}", server.url());
    config.credentials = Credentials {
        client_token: "ck".to_string(),
        client_secret: "cs".to_string(),
        access_token: "at".to_string(),
        access_secret: "as".to_string(),
    };
    config
}

pub fn use_sqlite(config: &mut Config, dir: &Path) {
    config.store.backend = StoreBackend::Sqlite;
    config.store.dsn = format!("sqlite:{}", dir.join("issues.db").display());
}

pub fn use_file(config: &mut Config, dir: &Path) {
    config.store.backend = StoreBackend::File;
    config.store.issues_file = dir.join("issues.json");
}

/// Create an empty snapshot at the configured issues file.
pub fn seed_empty_file(config: &Config) {
    std::fs::write(&config.store.issues_file, "[]").expect("Failed to seed issues file");
}

/// JSON for one issue as the GitHub API returns it.
pub fn issue_json(id: i64, number: i64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "number": number,
        "title": title,
        "html_url": format!("https://github.com/vim-jp/issues/issues/{number}"),
        "state": "open",
        "user": {"login": "mattn"},
    })
}

/// Serve `body` as the issue list, any number of times.
pub async fn mock_issues(server: &mut ServerGuard, body: &serde_json::Value) -> Mock {
    server
        .mock("GET", ISSUES_PATH)
        .match_query(Matcher::UrlEncoded("state".into(), "all".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

/// Accept status updates with `status`, expecting exactly `hits` requests.
pub async fn mock_update(server: &mut ServerGuard, status: &str, code: usize, hits: usize) -> Mock {
    server
        .mock("POST", UPDATE_PATH)
        .match_header("authorization", Matcher::Regex("^OAuth ".into()))
        .match_body(Matcher::UrlEncoded("status".into(), status.into()))
        .with_status(code)
        .with_body("{}")
        .expect(hits)
        .create_async()
        .await
}
