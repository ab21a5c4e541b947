//! Platform repository trait definition.
//!
//! This port defines the interface for platform persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{AiPlatform, FindAiPlatform, NewAiPlatform, UpdateAiPlatform};

/// Repository for platform records.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - `find` applies `limit`/`offset` in the store, ordered newest first
///   (`created_at` descending, then `id` descending)
/// - `update` applies every `Some` field in one statement
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiPlatformRepository: Send + Sync {
    /// Insert a new platform and return it with its assigned ID.
    async fn insert(&self, platform: &NewAiPlatform) -> Result<AiPlatform, RepositoryError>;

    /// Find platforms matching the filter.
    async fn find(&self, filter: &FindAiPlatform) -> Result<Vec<AiPlatform>, RepositoryError>;

    /// Get a platform by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the platform doesn't exist.
    async fn get_by_id(&self, id: i32) -> Result<AiPlatform, RepositoryError>;

    /// Apply a partial update and return the stored record.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the platform doesn't exist.
    async fn update(
        &self,
        id: i32,
        update: &UpdateAiPlatform,
    ) -> Result<AiPlatform, RepositoryError>;

    /// Delete a platform by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the platform doesn't exist.
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
