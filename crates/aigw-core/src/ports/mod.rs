//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - No `reqwest` types in any signature
//! - Repository traits are minimal and CRUD-focused

pub mod platform_repository;
pub mod upstream;

use std::sync::Arc;
use thiserror::Error;

use crate::domain::{PageTokenError, ResourceNameError};

pub use platform_repository::AiPlatformRepository;
pub use upstream::{UpstreamClientPort, UpstreamError, UpstreamRequest, UpstreamResponse};

#[cfg(test)]
pub use platform_repository::MockAiPlatformRepository;
#[cfg(test)]
pub use upstream::MockUpstreamClientPort;

/// Container for all repository trait objects.
///
/// Lives in `aigw-core` so that `AppCore` can accept it without depending
/// on `aigw-db`.
#[derive(Clone)]
pub struct Repos {
    /// Platform registry storage.
    pub platforms: Arc<dyn AiPlatformRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(platforms: Arc<dyn AiPlatformRepository>) -> Self {
        Self { platforms }
    }
}

/// Domain-specific errors for repository operations.
///
/// Abstracts away storage implementation details (e.g., sqlx errors).
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, connection, schema).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored value could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Coarse failure classification shared by every adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed caller input.
    InvalidArgument,
    /// The referenced record does not exist.
    NotFound,
    /// Storage or serialization failure not caused by the caller.
    Internal,
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own representation (HTTP status codes,
/// CLI exit codes) through [`CoreError::kind`].
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Repository(RepositoryError::NotFound(_)) => ErrorKind::NotFound,
            Self::Repository(_) | Self::Internal(_) => ErrorKind::Internal,
            Self::Validation(_) => ErrorKind::InvalidArgument,
        }
    }
}

impl From<ResourceNameError> for CoreError {
    fn from(err: ResourceNameError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<PageTokenError> for CoreError {
    fn from(err: PageTokenError) -> Self {
        Self::Validation(format!("invalid page token: {err}"))
    }
}
