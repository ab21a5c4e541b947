//! Answer service - the gateway between callers and platform endpoints.
//!
//! Looks up the addressed platform, posts a single-message chat request to
//! it and normalizes the reply with the platform's response adapter.
//! Upstream trouble is reported inside [`AnswerResult`]; only bad references
//! and registry failures surface as [`CoreError`].

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::domain::{AiPlatform, AnswerResult, ChatRequest, extract_answer, parse_platform_ref};
use crate::ports::{AiPlatformRepository, CoreError, UpstreamClientPort, UpstreamRequest};

/// Status code treated as a successful upstream reply. Anything else fails.
const UPSTREAM_OK: u16 = 200;

/// Service for generating answers through registered platforms.
pub struct AnswerService {
    repo: Arc<dyn AiPlatformRepository>,
    upstream: Arc<dyn UpstreamClientPort>,
}

impl AnswerService {
    pub fn new(repo: Arc<dyn AiPlatformRepository>, upstream: Arc<dyn UpstreamClientPort>) -> Self {
        Self { repo, upstream }
    }

    /// Generate an answer from the platform named by `platform_ref`.
    ///
    /// `platform_ref` is either `ai-platforms/{id}` or a bare ID.
    pub async fn generate_answer(
        &self,
        platform_ref: &str,
        prompt: &str,
    ) -> Result<AnswerResult, CoreError> {
        self.generate_answer_with_cancel(platform_ref, prompt, CancellationToken::new())
            .await
    }

    /// Like [`generate_answer`](Self::generate_answer), but abandons the
    /// upstream call as soon as `cancel` fires.
    pub async fn generate_answer_with_cancel(
        &self,
        platform_ref: &str,
        prompt: &str,
        cancel: CancellationToken,
    ) -> Result<AnswerResult, CoreError> {
        let id = parse_platform_ref(platform_ref)?;
        let platform = self.repo.get_by_id(id).await?;

        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!(target: "aigw.gateway", platform_id = id, "Answer request cancelled");
                Ok(AnswerResult::failed("Request cancelled"))
            }
            result = self.ask(&platform, prompt) => Ok(result),
        }
    }

    async fn ask(&self, platform: &AiPlatform, prompt: &str) -> AnswerResult {
        let request = UpstreamRequest {
            url: platform.url.trim().to_string(),
            bearer_token: platform
                .has_access_key()
                .then(|| platform.access_key.clone()),
            body: ChatRequest::user_prompt(&platform.model, prompt),
        };

        debug!(
            target: "aigw.gateway",
            platform_id = platform.id,
            platform_type = %platform.platform_type,
            url = %platform.url,
            model = %platform.model,
            "Posting prompt to AI platform"
        );

        let response = match self.upstream.post_json(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(target: "aigw.gateway", platform_id = platform.id, error = %e, "AI platform request failed");
                return AnswerResult::failed(e.to_string());
            }
        };

        if response.status != UPSTREAM_OK {
            warn!(
                target: "aigw.gateway",
                platform_id = platform.id,
                status = response.status,
                "AI platform returned error status"
            );
            return AnswerResult::failed(format!(
                "AI platform returned error status: {}, body: {}",
                response.status, response.body
            ));
        }

        let reply: serde_json::Value = match serde_json::from_str(&response.body) {
            Ok(reply) => reply,
            Err(e) => return AnswerResult::failed(format!("Failed to parse response: {e}")),
        };

        match extract_answer(platform.platform_type, &reply) {
            Ok(answer) => {
                debug!(
                    target: "aigw.gateway",
                    platform_id = platform.id,
                    answer_len = answer.len(),
                    "AI platform answered"
                );
                AnswerResult::answered(answer)
            }
            Err(e) => AnswerResult::failed(format!("Failed to parse response: {e}")),
        }
    }
}
