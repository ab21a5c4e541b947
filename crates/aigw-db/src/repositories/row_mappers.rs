//! Row mapping shared by the `SQLite` and PostgreSQL repositories.

use aigw_core::{AiPlatform, PlatformType, RepositoryError};
use chrono::{DateTime, Utc};

/// Shared SELECT column list for platform queries.
pub const PLATFORM_COLUMNS: &str =
    "id, platform_type, url, access_key, display_name, description, model, created_ts, updated_ts";

/// Ordering used by every listing query.
pub const PLATFORM_ORDER: &str = " ORDER BY created_ts DESC, id DESC";

/// One `ai_platform` row as stored. Timestamps are unix seconds.
#[derive(Debug, sqlx::FromRow)]
pub struct AiPlatformRow {
    pub id: i32,
    pub platform_type: String,
    pub url: String,
    pub access_key: String,
    pub display_name: String,
    pub description: String,
    pub model: String,
    pub created_ts: i64,
    pub updated_ts: i64,
}

impl AiPlatformRow {
    /// Convert into the domain record.
    pub fn into_platform(self) -> Result<AiPlatform, RepositoryError> {
        Ok(AiPlatform {
            id: self.id,
            platform_type: PlatformType::from_tag(&self.platform_type),
            url: self.url,
            access_key: self.access_key,
            display_name: self.display_name,
            description: self.description,
            model: self.model,
            created_at: from_unix(self.created_ts)?,
            updated_at: from_unix(self.updated_ts)?,
        })
    }
}

/// Convert a batch of rows, failing on the first bad one.
pub fn rows_to_platforms(rows: Vec<AiPlatformRow>) -> Result<Vec<AiPlatform>, RepositoryError> {
    rows.into_iter().map(AiPlatformRow::into_platform).collect()
}

fn from_unix(seconds: i64) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| RepositoryError::Serialization(format!("timestamp out of range: {seconds}")))
}

pub fn storage_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

pub fn not_found(id: i32) -> RepositoryError {
    RepositoryError::NotFound(format!("AI platform with ID {id}"))
}
