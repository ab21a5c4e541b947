//! Serve command handler.

use std::time::Duration;

use aigw_axum::ServerConfig;
use anyhow::Result;

/// Run the HTTP API until Ctrl-C.
pub async fn execute(
    database_url: &str,
    upstream_timeout: Duration,
    port: u16,
    allowed_origins: Vec<String>,
) -> Result<()> {
    let mut config = ServerConfig::with_defaults()
        .with_port(port)
        .with_database_url(database_url)
        .with_upstream_timeout(upstream_timeout);
    if !allowed_origins.is_empty() {
        config = config.with_allowed_origins(allowed_origins);
    }

    println!("Starting aigw API on port {port}");
    aigw_axum::start_server(config).await
}
