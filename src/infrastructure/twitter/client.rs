use async_trait::async_trait;
use reqwest::{header, Client as ReqwestClient, StatusCode};
use std::time::Duration;
use tracing::{debug, instrument};

use super::error::TwitterError;
use super::oauth::OAuthSigner;
use crate::domain::errors::DomainResult;
use crate::domain::models::{Credentials, TwitterConfig};
use crate::domain::ports::Announcer;

/// Posts status updates as a signed, form-encoded `POST`.
///
/// Only `200 OK` counts as success. Nothing is retried.
pub struct TwitterAnnouncer {
    http_client: ReqwestClient,
    update_url: String,
    signer: OAuthSigner,
}

impl TwitterAnnouncer {
    pub fn new(config: &TwitterConfig, credentials: Credentials) -> Result<Self, TwitterError> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            update_url: config.update_url.clone(),
            signer: OAuthSigner::new(credentials),
        })
    }

    #[instrument(skip(self, status), fields(url = %self.update_url))]
    async fn send_status(&self, status: &str) -> Result<(), TwitterError> {
        let params = [("status", status)];
        let authorization = self
            .signer
            .authorization_header("POST", &self.update_url, &params)?;

        let response = self
            .http_client
            .post(&self.update_url)
            .header(header::AUTHORIZATION, authorization)
            .form(&params)
            .send()
            .await?;

        let code = response.status();
        if code != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(TwitterError::Rejected { status: code, body });
        }

        debug!("status update accepted");
        Ok(())
    }
}

#[async_trait]
impl Announcer for TwitterAnnouncer {
    async fn post(&self, status: &str) -> DomainResult<()> {
        Ok(self.send_status(status).await?)
    }
}
