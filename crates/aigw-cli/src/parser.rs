//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the AI platform gateway.
#[derive(Parser)]
#[command(name = "aigw")]
#[command(about = "Register AI platforms and ask them questions")]
#[command(version)]
pub struct Cli {
    /// Registry database URL (sqlite://path, sqlite::memory:, postgres://...)
    #[arg(
        long = "database-url",
        env = "AIGW_DATABASE_URL",
        default_value = aigw_axum::bootstrap::DEFAULT_DATABASE_URL,
        global = true
    )]
    pub database_url: String,

    /// Upstream request timeout in seconds
    #[arg(
        long = "upstream-timeout-secs",
        env = "AIGW_UPSTREAM_TIMEOUT_SECS",
        default_value_t = 60,
        global = true
    )]
    pub upstream_timeout_secs: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
