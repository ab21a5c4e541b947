//! Command handlers.
//!
//! Each handler exposes an `execute` function taking the [`CliContext`]
//! (except `serve`, which composes its own server context).
//!
//! [`CliContext`]: crate::bootstrap::CliContext

pub mod add;
pub mod ask;
pub mod list;
pub mod remove;
pub mod serve;
