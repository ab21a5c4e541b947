//! In-memory repository for service tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{AiPlatform, FindAiPlatform, NewAiPlatform, UpdateAiPlatform};
use crate::ports::{AiPlatformRepository, RepositoryError};

#[derive(Default)]
pub struct InMemoryPlatformRepository {
    rows: Mutex<Vec<AiPlatform>>,
}

impl InMemoryPlatformRepository {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

fn not_found(id: i32) -> RepositoryError {
    RepositoryError::NotFound(format!("AI platform {id}"))
}

#[async_trait]
impl AiPlatformRepository for InMemoryPlatformRepository {
    async fn insert(&self, platform: &NewAiPlatform) -> Result<AiPlatform, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let record = AiPlatform {
            id,
            platform_type: platform.platform_type,
            url: platform.url.clone(),
            access_key: platform.access_key.clone(),
            display_name: platform.display_name.clone(),
            description: platform.description.clone(),
            model: platform.model.clone(),
            created_at: platform.created_at,
            updated_at: platform.updated_at,
        };
        rows.push(record.clone());
        Ok(record)
    }

    async fn find(&self, filter: &FindAiPlatform) -> Result<Vec<AiPlatform>, RepositoryError> {
        let mut rows: Vec<AiPlatform> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| filter.id.is_none_or(|id| p.id == id))
            .filter(|p| filter.platform_type.is_none_or(|t| p.platform_type == t))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let offset = filter.offset.unwrap_or(0) as usize;
        let limit = filter.limit.map_or(usize::MAX, |l| l as usize);
        Ok(rows.into_iter().skip(offset).take(limit).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<AiPlatform, RepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn update(&self, id: i32, update: &UpdateAiPlatform) -> Result<AiPlatform, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.iter_mut().find(|p| p.id == id).ok_or_else(|| not_found(id))?;

        if let Some(platform_type) = update.platform_type {
            row.platform_type = platform_type;
        }
        if let Some(url) = &update.url {
            row.url.clone_from(url);
        }
        if let Some(access_key) = &update.access_key {
            row.access_key.clone_from(access_key);
        }
        if let Some(display_name) = &update.display_name {
            row.display_name.clone_from(display_name);
        }
        if let Some(description) = &update.description {
            row.description.clone_from(description);
        }
        if let Some(model) = &update.model {
            row.model.clone_from(model);
        }
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}
