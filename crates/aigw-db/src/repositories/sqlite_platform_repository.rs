//! `SQLite` implementation of the `AiPlatformRepository` trait.

use aigw_core::{
    AiPlatform, AiPlatformRepository, FindAiPlatform, NewAiPlatform, PlatformType,
    RepositoryError, UpdateAiPlatform,
};
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::row_mappers::{
    AiPlatformRow, PLATFORM_COLUMNS, PLATFORM_ORDER, not_found, rows_to_platforms, storage_error,
};

/// `SQLite` implementation of the platform repository.
pub struct SqlitePlatformRepository {
    pool: SqlitePool,
}

impl SqlitePlatformRepository {
    /// Create a new repository with the given connection pool.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl AiPlatformRepository for SqlitePlatformRepository {
    async fn insert(&self, platform: &NewAiPlatform) -> Result<AiPlatform, RepositoryError> {
        let row: AiPlatformRow = sqlx::query_as(&format!(
            "INSERT INTO ai_platform (platform_type, url, access_key, display_name, description, model, created_ts, updated_ts)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
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
        let mut query = QueryBuilder::<Sqlite>::new(format!("SELECT {PLATFORM_COLUMNS} FROM ai_platform"));

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

        // SQLite only accepts OFFSET after a LIMIT; -1 means unbounded
        match (filter.limit, filter.offset) {
            (Some(limit), offset) => {
                query.push(" LIMIT ").push_bind(i64::from(limit));
                if let Some(offset) = offset {
                    query.push(" OFFSET ").push_bind(i64::from(offset));
                }
            }
            (None, Some(offset)) => {
                query.push(" LIMIT -1 OFFSET ").push_bind(i64::from(offset));
            }
            (None, None) => {}
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
            sqlx::query_as(&format!("SELECT {PLATFORM_COLUMNS} FROM ai_platform WHERE id = ?"))
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
                platform_type = COALESCE(?, platform_type),
                url = COALESCE(?, url),
                access_key = COALESCE(?, access_key),
                display_name = COALESCE(?, display_name),
                description = COALESCE(?, description),
                model = COALESCE(?, model),
                updated_ts = ?
             WHERE id = ?
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
        let result = sqlx::query("DELETE FROM ai_platform WHERE id = ?")
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
