//! Domain types for aigw.
//!
//! These types represent the core business entities, independent of
//! storage or transport. They carry no `sqlx`, `axum` or `reqwest` types.

pub mod adapter;
pub mod answer;
pub mod pagination;
pub mod platform;
pub mod resource_name;

pub use adapter::{ResponseFormatError, extract_answer, strip_think_tags};
pub use answer::{AnswerResult, ChatMessage, ChatRequest};
pub use pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Page, PageCursor, PageRequest, PageTokenError};
pub use platform::{
    AiPlatform, AiPlatformInput, FindAiPlatform, NewAiPlatform, PlatformType, UpdateAiPlatform,
    UpdateField,
};
pub use resource_name::{
    RESOURCE_COLLECTION, ResourceNameError, parse_platform_ref, platform_resource_name,
};
