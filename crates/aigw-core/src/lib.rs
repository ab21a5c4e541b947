#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    AiPlatform, AiPlatformInput, AnswerResult, ChatMessage, ChatRequest, DEFAULT_PAGE_SIZE,
    FindAiPlatform, MAX_PAGE_SIZE, NewAiPlatform, Page, PageCursor, PageRequest, PlatformType,
    RESOURCE_COLLECTION, ResponseFormatError, UpdateAiPlatform, UpdateField, extract_answer,
    parse_platform_ref, platform_resource_name, strip_think_tags,
};
pub use ports::{
    AiPlatformRepository, CoreError, ErrorKind, Repos, RepositoryError, UpstreamClientPort,
    UpstreamError, UpstreamRequest, UpstreamResponse,
};
pub use services::{AnswerService, AppCore, PlatformService};
