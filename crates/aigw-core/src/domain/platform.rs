//! AI platform domain types.
//!
//! A platform is a configured external inference endpoint: a URL, a bearer
//! credential, the model to request, and a type tag that decides how the
//! endpoint's replies are parsed.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::resource_name::platform_resource_name;

/// Response format family of a platform.
///
/// Stored as its upper-case tag (`OLLAMA`, `DEEPSEEK`, `UNSPECIFIED`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlatformType {
    /// Generic endpoint replying with `{ "response": "..." }`.
    #[default]
    Unspecified,
    /// Ollama chat endpoint replying with `{ "message": { "content": "..." } }`.
    Ollama,
    /// DeepSeek / OpenAI-compatible endpoint replying with `choices[0].message.content`.
    Deepseek,
}

impl PlatformType {
    /// Every platform type, in declaration order.
    pub const ALL: [Self; 3] = [Self::Unspecified, Self::Ollama, Self::Deepseek];

    /// Storage and wire tag for this type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "UNSPECIFIED",
            Self::Ollama => "OLLAMA",
            Self::Deepseek => "DEEPSEEK",
        }
    }

    /// Human-readable vendor label, used in error messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unspecified => "generic",
            Self::Ollama => "Ollama",
            Self::Deepseek => "DeepSeek",
        }
    }

    /// Parse a stored tag. Unknown tags map to `Unspecified`.
    pub fn from_tag(tag: &str) -> Self {
        Self::parse(tag).unwrap_or_default()
    }

    /// Parse a tag strictly (case-insensitive). Returns `None` for unknown tags.
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for PlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted platform record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiPlatform {
    /// Database ID, assigned on insert and never changed.
    pub id: i32,
    pub platform_type: PlatformType,
    /// Absolute HTTP(S) endpoint the gateway posts to.
    pub url: String,
    /// Bearer credential sent as `Authorization: Bearer <key>`.
    pub access_key: String,
    pub display_name: String,
    pub description: String,
    /// Model identifier placed in the request body.
    pub model: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AiPlatform {
    /// Resource name of this record (`ai-platforms/{id}`).
    pub fn name(&self) -> String {
        platform_resource_name(self.id)
    }

    /// Whether a bearer credential should be sent.
    pub fn has_access_key(&self) -> bool {
        !self.access_key.is_empty()
    }
}

/// Caller-supplied platform fields, used by both create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiPlatformInput {
    #[serde(default)]
    pub platform_type: PlatformType,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub access_key: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub model: String,
}

impl AiPlatformInput {
    /// Create an input with all required fields and an empty description.
    pub fn new(
        platform_type: PlatformType,
        url: impl Into<String>,
        access_key: impl Into<String>,
        display_name: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            platform_type,
            url: url.into(),
            access_key: access_key.into(),
            display_name: display_name.into(),
            description: String::new(),
            model: model.into(),
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A validated platform ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAiPlatform {
    pub platform_type: PlatformType,
    pub url: String,
    pub access_key: String,
    pub display_name: String,
    pub description: String,
    pub model: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewAiPlatform {
    /// Build an insertable record from input, stamping both timestamps with `now`.
    pub fn from_input(input: AiPlatformInput, now: DateTime<Utc>) -> Self {
        Self {
            platform_type: input.platform_type,
            url: input.url.trim().to_string(),
            access_key: input.access_key,
            display_name: input.display_name,
            description: input.description,
            model: input.model,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A mutable field addressable by an update mask path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateField {
    PlatformType,
    Url,
    AccessKey,
    DisplayName,
    Description,
    Model,
}

impl UpdateField {
    /// Every mutable field. An empty mask means all of these.
    pub const ALL: [Self; 6] = [
        Self::PlatformType,
        Self::Url,
        Self::AccessKey,
        Self::DisplayName,
        Self::Description,
        Self::Model,
    ];

    /// Mask path naming this field.
    pub const fn path(self) -> &'static str {
        match self {
            Self::PlatformType => "platform_type",
            Self::Url => "url",
            Self::AccessKey => "access_key",
            Self::DisplayName => "display_name",
            Self::Description => "description",
            Self::Model => "model",
        }
    }

    /// Look up a field by mask path. Camel-case paths are accepted too.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim();
        Self::ALL.into_iter().find(|f| {
            f.path() == path || f.path().replace('_', "").eq_ignore_ascii_case(path)
        })
    }

    /// Whether the field must never be persisted blank.
    pub const fn is_required(self) -> bool {
        matches!(
            self,
            Self::Url | Self::AccessKey | Self::DisplayName | Self::Model
        )
    }
}

/// A partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateAiPlatform {
    pub platform_type: Option<PlatformType>,
    pub url: Option<String>,
    pub access_key: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub model: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl UpdateAiPlatform {
    /// Create an update that only refreshes `updated_at`.
    pub const fn touch(updated_at: DateTime<Utc>) -> Self {
        Self {
            platform_type: None,
            url: None,
            access_key: None,
            display_name: None,
            description: None,
            model: None,
            updated_at,
        }
    }

    /// Copy the masked fields out of `input`. The URL is trimmed.
    pub fn from_input(
        input: &AiPlatformInput,
        fields: &[UpdateField],
        updated_at: DateTime<Utc>,
    ) -> Self {
        let mut update = Self::touch(updated_at);
        for field in fields {
            match field {
                UpdateField::PlatformType => update.platform_type = Some(input.platform_type),
                UpdateField::Url => update.url = Some(input.url.trim().to_string()),
                UpdateField::AccessKey => update.access_key = Some(input.access_key.clone()),
                UpdateField::DisplayName => update.display_name = Some(input.display_name.clone()),
                UpdateField::Description => update.description = Some(input.description.clone()),
                UpdateField::Model => update.model = Some(input.model.clone()),
            }
        }
        update
    }

    /// The value this update writes for `field`, if any.
    pub fn text_value(&self, field: UpdateField) -> Option<&str> {
        match field {
            UpdateField::PlatformType => self.platform_type.map(PlatformType::as_str),
            UpdateField::Url => self.url.as_deref(),
            UpdateField::AccessKey => self.access_key.as_deref(),
            UpdateField::DisplayName => self.display_name.as_deref(),
            UpdateField::Description => self.description.as_deref(),
            UpdateField::Model => self.model.as_deref(),
        }
    }
}

/// Repository query filter. Absent fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindAiPlatform {
    pub id: Option<i32>,
    pub platform_type: Option<PlatformType>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl FindAiPlatform {
    /// Match a single record by ID.
    pub fn by_id(id: i32) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Restrict to one platform type.
    #[must_use]
    pub const fn with_platform_type(mut self, platform_type: PlatformType) -> Self {
        self.platform_type = Some(platform_type);
        self
    }

    /// Bound the result window.
    #[must_use]
    pub const fn with_window(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }
}
