//! Platform service - the registry of configured inference endpoints.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::domain::{
    AiPlatform, AiPlatformInput, FindAiPlatform, NewAiPlatform, Page, PageRequest, UpdateAiPlatform,
    UpdateField,
};
use crate::ports::{AiPlatformRepository, CoreError, RepositoryError};

/// Service for platform CRUD.
///
/// Adds field validation and update-mask handling on top of the injected
/// `AiPlatformRepository`; everything else is delegated.
pub struct PlatformService {
    repo: Arc<dyn AiPlatformRepository>,
}

impl PlatformService {
    /// Create a new platform service with the given repository.
    pub fn new(repo: Arc<dyn AiPlatformRepository>) -> Self {
        Self { repo }
    }

    /// Register a new platform.
    pub async fn create(&self, input: AiPlatformInput) -> Result<AiPlatform, CoreError> {
        for field in UpdateField::ALL {
            if field.is_required() {
                require_non_blank(field, input_value(&input, field))?;
            }
        }

        let platform = NewAiPlatform::from_input(input, now_seconds());
        let created = self
            .repo
            .insert(&platform)
            .await
            .map_err(store_failure("create AI platform".to_string()))?;

        info!(
            target: "aigw.registry",
            id = created.id,
            platform_type = %created.platform_type,
            "AI platform created"
        );
        Ok(created)
    }

    /// Get a platform by ID.
    pub async fn get(&self, id: i32) -> Result<AiPlatform, CoreError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(store_failure(format!("get AI platform {id}")))
    }

    /// List platforms one page at a time.
    ///
    /// The store is asked for one row more than the page size; getting it
    /// back means another page exists.
    pub async fn list(&self, request: &PageRequest) -> Result<Page<AiPlatform>, CoreError> {
        let cursor = request.cursor()?;
        let filter = FindAiPlatform::default().with_window(cursor.fetch_limit(), cursor.offset);

        let rows = self
            .repo
            .find(&filter)
            .await
            .map_err(store_failure("list AI platforms".to_string()))?;
        let page = Page::from_lookahead(rows, cursor);

        debug!(
            target: "aigw.registry",
            limit = cursor.limit,
            offset = cursor.offset,
            returned = page.items.len(),
            has_more = page.next_page_token.is_some(),
            "Listed AI platforms"
        );
        Ok(page)
    }

    /// Update a platform.
    ///
    /// With an empty `update_mask` every mutable field is overwritten from
    /// `input`, except that a blank access key keeps the stored one (keys
    /// are never handed back to callers). Otherwise only the named paths
    /// are written. Unknown paths and blank required fields are rejected
    /// before anything is stored.
    pub async fn update(
        &self,
        id: i32,
        input: &AiPlatformInput,
        update_mask: &[String],
    ) -> Result<AiPlatform, CoreError> {
        let mut fields = resolve_mask(update_mask)?;
        if update_mask.is_empty() && input.access_key.trim().is_empty() {
            fields.retain(|field| *field != UpdateField::AccessKey);
        }

        let existing = self
            .repo
            .get_by_id(id)
            .await
            .map_err(store_failure(format!("update AI platform {id}")))?;
        let updated_at = now_seconds().max(existing.created_at);
        let update = UpdateAiPlatform::from_input(input, &fields, updated_at);

        for field in &fields {
            if field.is_required() {
                require_non_blank(*field, update.text_value(*field).unwrap_or_default())?;
            }
        }

        debug!(
            target: "aigw.registry",
            id,
            fields = ?fields.iter().map(|f| f.path()).collect::<Vec<_>>(),
            "Updating AI platform"
        );
        let updated = self
            .repo
            .update(id, &update)
            .await
            .map_err(store_failure(format!("update AI platform {id}")))?;

        info!(target: "aigw.registry", id, "AI platform updated");
        Ok(updated)
    }

    /// Delete a platform. Deleting a missing ID is a `NotFound` error.
    pub async fn delete(&self, id: i32) -> Result<(), CoreError> {
        self.repo
            .delete(id)
            .await
            .map_err(store_failure(format!("delete AI platform {id}")))?;
        info!(target: "aigw.registry", id, "AI platform deleted");
        Ok(())
    }
}

/// Name the failed operation on store errors. `NotFound` passes through so
/// it still classifies as [`ErrorKind::NotFound`](crate::ports::ErrorKind).
fn store_failure(operation: String) -> impl FnOnce(RepositoryError) -> CoreError {
    move |err| match err {
        err @ RepositoryError::NotFound(_) => CoreError::Repository(err),
        err => CoreError::Internal(format!("failed to {operation}: {err}")),
    }
}

/// Turn mask paths into fields. An empty mask selects every field.
fn resolve_mask(update_mask: &[String]) -> Result<Vec<UpdateField>, CoreError> {
    if update_mask.is_empty() {
        return Ok(UpdateField::ALL.to_vec());
    }

    let mut fields = Vec::with_capacity(update_mask.len());
    for path in update_mask {
        let field = UpdateField::from_path(path)
            .ok_or_else(|| CoreError::Validation(format!("unsupported update mask path: {path}")))?;
        if !fields.contains(&field) {
            fields.push(field);
        }
    }
    Ok(fields)
}

fn input_value(input: &AiPlatformInput, field: UpdateField) -> &str {
    match field {
        UpdateField::PlatformType => input.platform_type.as_str(),
        UpdateField::Url => &input.url,
        UpdateField::AccessKey => &input.access_key,
        UpdateField::DisplayName => &input.display_name,
        UpdateField::Description => &input.description,
        UpdateField::Model => &input.model,
    }
}

fn require_non_blank(field: UpdateField, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{} is required", field.path())));
    }
    Ok(())
}

/// Current time truncated to whole seconds, the resolution records are stored at.
fn now_seconds() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PageCursor, PlatformType};
    use crate::ports::{ErrorKind, MockAiPlatformRepository, RepositoryError};
    use crate::services::test_support::InMemoryPlatformRepository;

    fn service() -> (PlatformService, Arc<InMemoryPlatformRepository>) {
        let repo = Arc::new(InMemoryPlatformRepository::default());
        (PlatformService::new(repo.clone()), repo)
    }

    fn input(name: &str) -> AiPlatformInput {
        AiPlatformInput::new(
            PlatformType::Ollama,
            "http://localhost:11434/api/chat",
            "secret",
            name,
            "llama3",
        )
        .with_description("local box")
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_record() {
        let (service, _) = service();
        let created = service.create(input("local")).await.unwrap();
        let fetched = service.get(created.id).await.unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.name(), format!("ai-platforms/{}", created.id));
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[tokio::test]
    async fn test_create_trims_url() {
        let (service, _) = service();
        let mut request = input("trim");
        request.url = "  http://host/api  ".to_string();

        let created = service.create(request).await.unwrap();
        assert_eq!(created.url, "http://host/api");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_required_fields() {
        let (service, repo) = service();

        for field in ["url", "access_key", "display_name", "model"] {
            let mut request = input("x");
            match field {
                "url" => request.url = "   ".into(),
                "access_key" => request.access_key.clear(),
                "display_name" => request.display_name.clear(),
                _ => request.model.clear(),
            }
            let err = service.create(request).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert!(err.to_string().contains(field), "{err}");
        }
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_create_store_failure_is_internal() {
        let mut repo = MockAiPlatformRepository::new();
        repo.expect_insert()
            .returning(|_| Err(RepositoryError::Storage("disk full".into())));
        let service = PlatformService::new(Arc::new(repo));

        let err = service.create(input("x")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.to_string().contains("failed to create AI platform"), "{err}");
    }

    #[tokio::test]
    async fn test_store_failures_name_the_operation() {
        fn locked() -> RepositoryError {
            RepositoryError::Storage("database is locked".into())
        }

        let mut repo = MockAiPlatformRepository::new();
        repo.expect_find().returning(|_| Err(locked()));
        repo.expect_delete().returning(|_| Err(locked()));
        repo.expect_update().returning(|_, _| Err(locked()));
        repo.expect_get_by_id().returning(|id| match id {
            // Present, so update reaches the write
            1 => Ok(AiPlatform {
                id: 1,
                platform_type: PlatformType::Ollama,
                url: "http://h".into(),
                access_key: "k".into(),
                display_name: "n".into(),
                description: String::new(),
                model: "m".into(),
                created_at: now_seconds(),
                updated_at: now_seconds(),
            }),
            _ => Err(locked()),
        });
        let service = PlatformService::new(Arc::new(repo));

        let errors = [
            (service.get(4).await.unwrap_err(), "failed to get AI platform 4"),
            (
                service.list(&PageRequest::default()).await.unwrap_err(),
                "failed to list AI platforms",
            ),
            (
                service.update(1, &input("x"), &[]).await.unwrap_err(),
                "failed to update AI platform 1",
            ),
            (
                service.update(4, &input("x"), &[]).await.unwrap_err(),
                "failed to update AI platform 4",
            ),
            (service.delete(4).await.unwrap_err(), "failed to delete AI platform 4"),
        ];
        for (err, operation) in errors {
            assert_eq!(err.kind(), ErrorKind::Internal);
            let message = err.to_string();
            assert!(message.contains(operation), "{message}");
            assert!(message.contains("database is locked"), "{message}");
        }
    }

    #[tokio::test]
    async fn test_list_pages_through_records() {
        let (service, _) = service();
        for i in 0..5 {
            service.create(input(&format!("p{i}"))).await.unwrap();
        }

        let first = service.list(&PageRequest::with_size(3)).await.unwrap();
        assert_eq!(first.items.len(), 3);
        let token = first.next_page_token.expect("more pages");

        let second = service.list(&PageRequest::with_token(token)).await.unwrap();
        assert_eq!(second.items.len(), 2);
        assert!(second.next_page_token.is_none());

        let mut seen: Vec<i32> = first.items.iter().chain(&second.items).map(|p| p.id).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 5);
    }

    #[tokio::test]
    async fn test_list_small_collection_has_no_token() {
        let (service, _) = service();
        for i in 0..3 {
            service.create(input(&format!("p{i}"))).await.unwrap();
        }

        let page = service.list(&PageRequest::with_size(3)).await.unwrap();
        assert_eq!(page.items.len(), 3);
        assert!(page.next_page_token.is_none());

        let page = service.list(&PageRequest::default()).await.unwrap();
        assert_eq!(page.items.len(), 3);
        assert!(page.next_page_token.is_none());
    }

    #[tokio::test]
    async fn test_list_asks_store_for_one_extra_row_once() {
        let mut repo = MockAiPlatformRepository::new();
        repo.expect_find()
            .withf(|filter| filter.limit == Some(5) && filter.offset == Some(8))
            .times(1)
            .returning(|_| Ok(Vec::new()));
        let service = PlatformService::new(Arc::new(repo));

        let token = PageCursor::new(4, 8).encode();
        let page = service.list(&PageRequest::with_token(token)).await.unwrap();
        assert!(page.items.is_empty());
        assert!(page.next_page_token.is_none());
    }

    #[tokio::test]
    async fn test_list_rejects_bad_token() {
        let (service, _) = service();
        let err = service
            .list(&PageRequest::with_token("not a token"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[tokio::test]
    async fn test_update_without_mask_overwrites_everything() {
        let (service, _) = service();
        let created = service.create(input("before")).await.unwrap();

        let replacement = AiPlatformInput::new(
            PlatformType::Deepseek,
            " https://api.deepseek.com/chat/completions ",
            "new-key",
            "after",
            "deepseek-chat",
        );
        let updated = service.update(created.id, &replacement, &[]).await.unwrap();

        assert_eq!(updated.platform_type, PlatformType::Deepseek);
        assert_eq!(updated.url, "https://api.deepseek.com/chat/completions");
        assert_eq!(updated.access_key, "new-key");
        assert_eq!(updated.display_name, "after");
        assert_eq!(updated.model, "deepseek-chat");
        assert_eq!(updated.description, "");
        assert!(updated.updated_at >= updated.created_at);
    }

    #[tokio::test]
    async fn test_full_replace_without_key_keeps_stored_key() {
        let (service, _) = service();
        let created = service.create(input("before")).await.unwrap();

        // What a client holds after reading the record back
        let mut edited = input("after");
        edited.access_key.clear();
        let updated = service.update(created.id, &edited, &[]).await.unwrap();

        assert_eq!(updated.display_name, "after");
        assert_eq!(updated.access_key, "secret");
    }

    #[tokio::test]
    async fn test_masked_blank_key_is_rejected() {
        let (service, _) = service();
        let created = service.create(input("x")).await.unwrap();

        let err = service
            .update(created.id, &AiPlatformInput::default(), &["access_key".to_string()])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("access_key"), "{err}");
    }

    #[tokio::test]
    async fn test_update_with_mask_touches_only_named_fields() {
        let (service, _) = service();
        let created = service.create(input("before")).await.unwrap();

        let patch = AiPlatformInput {
            display_name: "renamed".into(),
            ..AiPlatformInput::default()
        };
        let updated = service
            .update(created.id, &patch, &["display_name".to_string()])
            .await
            .unwrap();

        assert_eq!(updated.display_name, "renamed");
        assert_eq!(updated.url, created.url);
        assert_eq!(updated.access_key, created.access_key);
        assert_eq!(updated.model, created.model);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.platform_type, created.platform_type);
    }

    #[tokio::test]
    async fn test_update_rejects_blank_required_field_without_writing() {
        let (service, _) = service();
        let created = service.create(input("keep")).await.unwrap();

        let patch = AiPlatformInput {
            display_name: "new name".into(),
            ..AiPlatformInput::default()
        };
        let err = service
            .update(
                created.id,
                &patch,
                &["display_name".to_string(), "url".to_string()],
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let unchanged = service.get(created.id).await.unwrap();
        assert_eq!(unchanged, created);
    }

    #[tokio::test]
    async fn test_update_rejects_unknown_mask_path() {
        let (service, _) = service();
        let created = service.create(input("x")).await.unwrap();

        let err = service
            .update(created.id, &input("y"), &["created_at".to_string()])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let (service, _) = service();

        assert_eq!(service.get(99).await.unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(service.delete(99).await.unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(
            service
                .update(99, &input("x"), &[])
                .await
                .unwrap_err()
                .kind(),
            ErrorKind::NotFound
        );
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let (service, repo) = service();
        let created = service.create(input("gone")).await.unwrap();

        service.delete(created.id).await.unwrap();
        assert_eq!(repo.len(), 0);
        assert_eq!(
            service.get(created.id).await.unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }
}
