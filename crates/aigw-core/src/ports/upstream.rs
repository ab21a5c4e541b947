//! Outbound HTTP port for talking to inference platforms.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ChatRequest;

/// One JSON POST to a platform endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    pub url: String,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub bearer_token: Option<String>,
    pub body: ChatRequest,
}

/// Raw upstream reply: status code plus the undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

/// Transport-level failures. A reply with any status code is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    #[error("AI platform request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Failed to connect to AI platform: {0}")]
    Connect(String),

    #[error("Failed to read response: {0}")]
    Body(String),
}

/// Client for posting chat requests to platform endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpstreamClientPort: Send + Sync {
    /// Post the request body as JSON and return the reply, whatever its status.
    async fn post_json(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError>;
}
