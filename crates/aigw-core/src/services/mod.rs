//! Core services.
//!
//! Services hold the business rules and talk to infrastructure only through
//! the traits in [`crate::ports`].

mod answer_service;
mod app_core;
mod platform_service;

#[cfg(test)]
mod test_support;

pub use answer_service::AnswerService;
pub use app_core::AppCore;
pub use platform_service::PlatformService;
