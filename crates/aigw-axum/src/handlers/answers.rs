//! Answer generation handlers.
//!
//! Upstream failures come back as `200` with `success: false`; only bad
//! references and registry errors map to error statuses. A client that
//! disconnects drops the handler future, which aborts the upstream call.

use aigw_core::AnswerResult;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

use crate::dto::{GenerateAnswerRequest, GenerateByNameRequest};
use crate::error::HttpError;
use crate::state::AppState;

/// Generate an answer from the platform in the path.
pub async fn generate(
    State(state): State<AppState>,
    Path(platform_ref): Path<String>,
    body: Result<Json<GenerateAnswerRequest>, JsonRejection>,
) -> Result<Json<AnswerResult>, HttpError> {
    let Json(request) = body?;
    let result = state
        .core
        .answers()
        .generate_answer(&platform_ref, &request.prompt)
        .await?;
    Ok(Json(result))
}

/// Generate an answer from the platform named in the body.
pub async fn generate_by_name(
    State(state): State<AppState>,
    body: Result<Json<GenerateByNameRequest>, JsonRejection>,
) -> Result<Json<AnswerResult>, HttpError> {
    let Json(request) = body?;
    let result = state
        .core
        .answers()
        .generate_answer(&request.name, &request.prompt)
        .await?;
    Ok(Json(result))
}
