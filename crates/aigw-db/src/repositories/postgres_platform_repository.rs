//! PostgreSQL implementation of the `AiPlatformRepository` trait.
//!
//! Same table layout and semantics as the `SQLite` repository; only the
//! placeholder syntax differs.

use aigw_core::{
    AiPlatform, AiPlatformRepository, FindAiPlatform, NewAiPlatform, PlatformType,
    RepositoryError, UpdateAiPlatform,
};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::row_mappers::{
    AiPlatformRow, PLATFORM_COLUMNS, PLATFORM_ORDER, not_found, rows_to_platforms, storage_error,
};

pub struct PostgresPlatformRepository {
    pool: PgPool,
}

impl PostgresPlatformRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AiPlatformRepository for PostgresPlatformRepository {
    async fn insert(&self, platform: &NewAiPlatform) -> Result<AiPlatform, RepositoryError> {
        let row: AiPlatformRow = sqlx::query_as(&format!(
            "INSERT INTO ai_platform (platform_type, url, access_key, display_name, description, model, created_ts, updated_ts)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {PLATFORM_COLUMNS}"
        ))
        .bind(platform.platform_type.as_str())
        .bind(&platform.url)
        .bind(&platform.access_key)
        .bind(&platform.display_name)
        .bind(&platform.description)
        .bind(&platform.model)
        .bind(platform.created_at.timestamp())
        .bind(platform.updated_at.timestamp())
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;

        row.into_platform()
    }

    async fn find(&self, filter: &FindAiPlatform) -> Result<Vec<AiPlatform>, RepositoryError> {
        let mut query =
            QueryBuilder::<Postgres>::new(format!("SELECT {PLATFORM_COLUMNS} FROM ai_platform"));

        let mut separator = " WHERE ";
        if let Some(id) = filter.id {
            query.push(separator).push("id = ").push_bind(id);
            separator = " AND ";
        }
        if let Some(platform_type) = filter.platform_type {
            query
                .push(separator)
                .push("platform_type = ")
                .push_bind(platform_type.as_str());
        }

        query.push(PLATFORM_ORDER);
        if let Some(limit) = filter.limit {
            query.push(" LIMIT ").push_bind(i64::from(limit));
        }
        if let Some(offset) = filter.offset {
            query.push(" OFFSET ").push_bind(i64::from(offset));
        }

        let rows: Vec<AiPlatformRow> = query
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows_to_platforms(rows)
    }

    async fn get_by_id(&self, id: i32) -> Result<AiPlatform, RepositoryError> {
        let row: Option<AiPlatformRow> =
            sqlx::query_as(&format!("SELECT {PLATFORM_COLUMNS} FROM ai_platform WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(storage_error)?;

        row.ok_or_else(|| not_found(id))?.into_platform()
    }

    async fn update(
        &self,
        id: i32,
        update: &UpdateAiPlatform,
    ) -> Result<AiPlatform, RepositoryError> {
        let row: Option<AiPlatformRow> = sqlx::query_as(&format!(
            "UPDATE ai_platform SET
                platform_type = COALESCE($1, platform_type),
                url = COALESCE($2, url),
                access_key = COALESCE($3, access_key),
                display_name = COALESCE($4, display_name),
                description = COALESCE($5, description),
                model = COALESCE($6, model),
                updated_ts = $7
             WHERE id = $8
             RETURNING {PLATFORM_COLUMNS}"
        ))
        .bind(update.platform_type.map(PlatformType::as_str))
        .bind(update.url.as_deref())
        .bind(update.access_key.as_deref())
        .bind(update.display_name.as_deref())
        .bind(update.description.as_deref())
        .bind(update.model.as_deref())
        .bind(update.updated_at.timestamp())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.ok_or_else(|| not_found(id))?.into_platform()
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM ai_platform WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}
