//! `AppCore` - the primary application facade.
//!
//! Composition root for core services. The HTTP and CLI adapters receive an
//! `AppCore` and reach every operation through it.

use std::sync::Arc;

use crate::ports::{Repos, UpstreamClientPort};

use super::{AnswerService, PlatformService};

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let repos = Repos::new(platform_repo);
/// let upstream = Arc::new(ReqwestUpstreamClient::new(UpstreamClientConfig::default())?);
/// let core = AppCore::new(repos, upstream);
///
/// let page = core.platforms().list(&PageRequest::default()).await?;
/// ```
pub struct AppCore {
    platforms: PlatformService,
    answers: AnswerService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories and upstream client.
    pub fn new(repos: Repos, upstream: Arc<dyn UpstreamClientPort>) -> Self {
        Self {
            platforms: PlatformService::new(Arc::clone(&repos.platforms)),
            answers: AnswerService::new(repos.platforms, upstream),
        }
    }

    /// Access the platform registry.
    pub const fn platforms(&self) -> &PlatformService {
        &self.platforms
    }

    /// Access the answer gateway.
    pub const fn answers(&self) -> &AnswerService {
        &self.answers
    }
}
