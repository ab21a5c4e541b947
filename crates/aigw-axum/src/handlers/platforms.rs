//! Platform registry handlers.

use aigw_core::{AiPlatformInput, CoreError, PageRequest, parse_platform_ref};
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use crate::dto::{
    ListPlatformsQuery, ListPlatformsResponse, PlatformDto, PlatformInputDto,
    UpdatePlatformRequest,
};
use crate::error::HttpError;
use crate::state::AppState;

/// Resolve a path segment (`7` or `ai-platforms%2F7`) to an ID.
fn platform_id(platform_ref: &str) -> Result<i32, HttpError> {
    parse_platform_ref(platform_ref).map_err(|e| CoreError::from(e).into())
}

/// List platforms, one page at a time.
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListPlatformsQuery>, QueryRejection>,
) -> Result<Json<ListPlatformsResponse>, HttpError> {
    let Query(query) = query?;
    let request = PageRequest::from(query);
    Ok(Json(state.core.platforms().list(&request).await?.into()))
}

/// Register a new platform.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<PlatformInputDto>, JsonRejection>,
) -> Result<Json<PlatformDto>, HttpError> {
    let Json(input) = body?;
    Ok(Json(state.core.platforms().create(input.into()).await?.into()))
}

/// Get a platform by ID or resource name.
pub async fn get(
    State(state): State<AppState>,
    Path(platform_ref): Path<String>,
) -> Result<Json<PlatformDto>, HttpError> {
    let id = platform_id(&platform_ref)?;
    Ok(Json(state.core.platforms().get(id).await?.into()))
}

/// Update a platform; an empty `updateMask` replaces every field.
pub async fn update(
    State(state): State<AppState>,
    Path(platform_ref): Path<String>,
    body: Result<Json<UpdatePlatformRequest>, JsonRejection>,
) -> Result<Json<PlatformDto>, HttpError> {
    let id = platform_id(&platform_ref)?;
    let Json(request) = body?;
    let input: AiPlatformInput = request.platform.into();
    let updated = state
        .core
        .platforms()
        .update(id, &input, &request.update_mask)
        .await?;
    Ok(Json(updated.into()))
}

/// Delete a platform.
pub async fn remove(
    State(state): State<AppState>,
    Path(platform_ref): Path<String>,
) -> Result<StatusCode, HttpError> {
    let id = platform_id(&platform_ref)?;
    state.core.platforms().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
