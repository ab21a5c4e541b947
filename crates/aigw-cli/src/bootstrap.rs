//! CLI bootstrap - the composition root.
//!
//! The only place where the CLI wires infrastructure together: the
//! registry database (via aigw-db), the upstream HTTP client (via
//! aigw-upstream) and the core services (via aigw-core).

use std::sync::Arc;
use std::time::Duration;

use aigw_core::{AppCore, UpstreamClientPort};
use aigw_db::CoreFactory;
use aigw_upstream::{ReqwestUpstreamClient, UpstreamClientConfig};
use anyhow::Result;

use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Registry database URL.
    pub database_url: String,
    /// Whole-request timeout for upstream calls.
    pub upstream_timeout: Duration,
}

impl CliConfig {
    /// Build config from parsed global flags.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            database_url: cli.database_url.clone(),
            upstream_timeout: Duration::from_secs(cli.upstream_timeout_secs),
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
}

impl CliContext {
    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }
}

/// Compose the CLI context from configuration.
pub async fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let upstream: Arc<dyn UpstreamClientPort> = Arc::new(ReqwestUpstreamClient::new(
        UpstreamClientConfig::new().with_timeout(config.upstream_timeout),
    )?);
    let app = CoreFactory::build_app_core(&config.database_url, upstream).await?;
    Ok(CliContext { app })
}
