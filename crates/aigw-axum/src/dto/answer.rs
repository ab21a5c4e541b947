//! Answer generation DTOs.
//!
//! Responses reuse `AnswerResult`, whose serde form is already the wire shape.

use serde::Deserialize;

/// Body of `POST /api/ai-platforms/{ref}/generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateAnswerRequest {
    pub prompt: String,
}

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateByNameRequest {
    /// Platform resource name (`ai-platforms/{id}`) or bare ID.
    pub name: String,
    pub prompt: String,
}
