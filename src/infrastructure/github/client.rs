//! GitHub REST client fetching the watched repository's issue list.

use async_trait::async_trait;
use reqwest::{header, Client as ReqwestClient};
use std::time::Duration;
use tracing::{debug, instrument};

use super::error::GitHubError;
use crate::domain::errors::DomainResult;
use crate::domain::models::{Issue, SourceConfig};
use crate::domain::ports::IssueSource;

/// Fetches the first page of `GET /repos/{owner}/{repo}/issues?state=all`.
///
/// No pagination and no retries. A failed fetch aborts the run.
pub struct GitHubIssueSource {
    http_client: ReqwestClient,
    issues_url: String,
}

impl GitHubIssueSource {
    pub fn new(config: &SourceConfig) -> Result<Self, GitHubError> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http_client,
            issues_url: config.issues_url(),
        })
    }

    pub fn issues_url(&self) -> &str {
        &self.issues_url
    }

    #[instrument(skip(self), fields(url = %self.issues_url))]
    async fn fetch_issues(&self) -> Result<Vec<Issue>, GitHubError> {
        let response = self
            .http_client
            .get(&self.issues_url)
            .header(header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(GitHubError::UnexpectedStatus { status, body });
        }

        let body = response.text().await?;
        let issues: Vec<Issue> = serde_json::from_str(&body)?;
        debug!(count = issues.len(), "decoded issue list");
        Ok(issues)
    }
}

#[async_trait]
impl IssueSource for GitHubIssueSource {
    async fn fetch(&self) -> DomainResult<Vec<Issue>> {
        Ok(self.fetch_issues().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use mockito::{Matcher, Server};

    fn config_for(server: &Server) -> SourceConfig {
        SourceConfig {
            api_base_url: server.url(),
            ..SourceConfig::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_decodes_issue_list() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/vim-jp/issues/issues")
            .match_query(Matcher::UrlEncoded("state".into(), "all".into()))
            .match_header("user-agent", Matcher::Regex("^vim-jp-issues-bot/".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!([
                    {"id": 12, "number": 2, "title": "second", "html_url": "https://x/2", "state": "open"},
                    {"id": 11, "number": 1, "title": "first", "html_url": "https://x/1", "state": "closed"}
                ])
                .to_string(),
            )
            .create_async()
            .await;

        let source = GitHubIssueSource::new(&config_for(&server)).unwrap();
        let issues = source.fetch().await.unwrap();

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].id, 12);
        assert_eq!(issues[1].title, "first");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_is_source_unavailable() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/repos/vim-jp/issues/issues")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body(r#"{"message": "API rate limit exceeded"}"#)
            .create_async()
            .await;

        let source = GitHubIssueSource::new(&config_for(&server)).unwrap();
        let err = source.fetch().await.unwrap_err();

        assert!(matches!(err, DomainError::SourceUnavailable(ref msg) if msg.contains("403")));
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_payload() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/repos/vim-jp/issues/issues")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let source = GitHubIssueSource::new(&config_for(&server)).unwrap();
        let err = source.fetch().await.unwrap_err();

        assert!(matches!(err, DomainError::InvalidSourcePayload(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_source_unavailable() {
        let config = SourceConfig {
            api_base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
            ..SourceConfig::default()
        };
        let source = GitHubIssueSource::new(&config).unwrap();

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, DomainError::SourceUnavailable(_)));
    }
}
