//! reqwest-backed upstream client.

use std::time::{Duration, Instant};

use aigw_core::{UpstreamClientPort, UpstreamError, UpstreamRequest, UpstreamResponse};
use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::config::UpstreamClientConfig;

/// The HTTP client could not be constructed (TLS backend setup).
#[derive(Debug, Error)]
#[error("failed to create HTTP client: {0}")]
pub struct ClientBuildError(#[from] reqwest::Error);

/// Production upstream client.
///
/// Holds one `reqwest::Client`, so connections are pooled across calls.
pub struct ReqwestUpstreamClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestUpstreamClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn new(config: UpstreamClientConfig) -> Result<Self, ClientBuildError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    fn send_error(&self, e: &reqwest::Error) -> UpstreamError {
        if e.is_timeout() {
            UpstreamError::Timeout(self.timeout)
        } else {
            UpstreamError::Connect(e.to_string())
        }
    }
}

#[async_trait]
impl UpstreamClientPort for ReqwestUpstreamClient {
    async fn post_json(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError> {
        let started = Instant::now();

        let mut builder = self.client.post(&request.url).json(&request.body);
        if let Some(token) = &request.bearer_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| self.send_error(&e))?;
        let status = response.status().as_u16();

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                UpstreamError::Timeout(self.timeout)
            } else {
                UpstreamError::Body(e.to_string())
            }
        })?;

        debug!(
            target: "aigw.gateway",
            status,
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            body_len = body.len(),
            "Upstream call completed"
        );

        Ok(UpstreamResponse { status, body })
    }
}
