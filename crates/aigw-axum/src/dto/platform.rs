//! Platform registry DTOs.

use aigw_core::{AiPlatform, AiPlatformInput, Page, PageRequest, PlatformType};
use serde::{Deserialize, Serialize};

/// A platform as returned by the API.
///
/// The access key itself is never echoed back; `hasAccessKey` reports
/// whether one is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformDto {
    /// Resource name, `ai-platforms/{id}`.
    pub name: String,
    pub id: i32,
    pub platform_type: PlatformType,
    pub url: String,
    pub has_access_key: bool,
    pub display_name: String,
    pub description: String,
    pub model: String,
    /// Unix seconds.
    pub create_time: i64,
    /// Unix seconds.
    pub update_time: i64,
}

impl From<AiPlatform> for PlatformDto {
    fn from(platform: AiPlatform) -> Self {
        Self {
            name: platform.name(),
            id: platform.id,
            platform_type: platform.platform_type,
            has_access_key: platform.has_access_key(),
            url: platform.url,
            display_name: platform.display_name,
            description: platform.description,
            model: platform.model,
            create_time: platform.created_at.timestamp(),
            update_time: platform.updated_at.timestamp(),
        }
    }
}

/// Writable platform fields, for create and update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformInputDto {
    pub platform_type: PlatformType,
    pub url: String,
    pub access_key: String,
    pub display_name: String,
    pub description: String,
    pub model: String,
}

impl From<PlatformInputDto> for AiPlatformInput {
    fn from(dto: PlatformInputDto) -> Self {
        Self {
            platform_type: dto.platform_type,
            url: dto.url,
            access_key: dto.access_key,
            display_name: dto.display_name,
            description: dto.description,
            model: dto.model,
        }
    }
}

/// `PATCH` body: new values plus the paths to write.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlatformRequest {
    pub platform: PlatformInputDto,
    #[serde(default)]
    pub update_mask: Vec<String>,
}

/// Query string for listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPlatformsQuery {
    pub page_size: Option<i64>,
    pub page_token: Option<String>,
}

impl From<ListPlatformsQuery> for PageRequest {
    fn from(query: ListPlatformsQuery) -> Self {
        Self {
            page_size: query.page_size.unwrap_or_default(),
            page_token: query.page_token,
        }
    }
}

/// One page of platforms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPlatformsResponse {
    pub platforms: Vec<PlatformDto>,
    /// Absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub next_page_token: Option<String>,
}

impl From<Page<AiPlatform>> for ListPlatformsResponse {
    fn from(page: Page<AiPlatform>) -> Self {
        Self {
            platforms: page.items.into_iter().map(PlatformDto::from).collect(),
            next_page_token: page.next_page_token,
        }
    }
}
