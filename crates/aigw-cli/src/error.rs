//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` to exit codes and user-facing messages.

use aigw_core::{CoreError, ErrorKind};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid input (bad reference, missing field, bad page token).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The referenced platform does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Registry storage failure.
    #[error("Database error: {0}")]
    Database(String),

    /// The platform was reached but did not produce an answer.
    #[error("{0}")]
    Upstream(String),
}

impl CliError {
    /// Map error to an exit code.
    ///
    /// Exit codes follow sysexits.h where a category fits:
    /// - 1: General error
    /// - 64: Invalid arguments (`EX_USAGE`)
    /// - 69: Upstream unavailable (`EX_UNAVAILABLE`)
    /// - 73: Database failure (`EX_CANTCREAT`, closest fit)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Arguments(_) => 64,
            Self::NotFound(_) => 1,
            Self::Upstream(_) => 69,
            Self::Database(_) => 73,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ErrorKind::InvalidArgument => Self::Arguments(message),
            ErrorKind::NotFound => Self::NotFound(message),
            ErrorKind::Internal => Self::Database(message),
        }
    }
}

/// Exit code for an error returned by a command.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CliError>()
        .map_or(1, CliError::exit_code)
}
