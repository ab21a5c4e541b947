//! Axum server bootstrap - the composition root.
//!
//! The only place where infrastructure is wired together for the web
//! adapter: database, upstream client and core services.

use std::sync::Arc;
use std::time::Duration;

use aigw_core::{AppCore, UpstreamClientPort};
use aigw_db::CoreFactory;
use aigw_upstream::{DEFAULT_UPSTREAM_TIMEOUT, ReqwestUpstreamClient, UpstreamClientConfig};
use anyhow::Result;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default registry location.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://aigw.db";

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Registry database URL (`sqlite://…`, `sqlite::memory:`, `postgres://…`).
    pub database_url: String,
    /// Whole-request timeout for upstream calls.
    pub upstream_timeout: Duration,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Create config with default settings.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_database_url(mut self, database_url: impl Into<String>) -> Self {
        self.database_url = database_url.into();
        self
    }

    #[must_use]
    pub const fn with_upstream_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = timeout;
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

/// Bootstrap the server's services from configuration.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        port = config.port,
        upstream_timeout_secs = config.upstream_timeout.as_secs(),
        "Axum bootstrap"
    );

    let upstream: Arc<dyn UpstreamClientPort> = Arc::new(ReqwestUpstreamClient::new(
        UpstreamClientConfig::new().with_timeout(config.upstream_timeout),
    )?);
    let core = CoreFactory::build_app_core(&config.database_url, upstream).await?;

    Ok(AxumContext {
        core: Arc::new(core),
    })
}

/// Start the web server and run until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("aigw listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("aigw stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
