//! Composition utilities for building `AppCore` with database backends.
//!
//! Construction only; no domain logic lives here.

use std::path::PathBuf;
use std::sync::Arc;

use aigw_core::{AppCore, Repos, UpstreamClientPort};
use sqlx::{PgPool, SqlitePool};
use tracing::info;

use crate::repositories::{PostgresPlatformRepository, SqlitePlatformRepository};
use crate::setup::{setup_database, setup_in_memory_database, setup_postgres_database};

/// Where the registry lives, parsed from a database URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    /// `SQLite` file (`sqlite://path`, `sqlite:path` or a bare path).
    Sqlite(PathBuf),
    /// Throwaway in-memory `SQLite` (`sqlite::memory:`).
    SqliteMemory,
    /// PostgreSQL server (`postgres://…` or `postgresql://…`).
    Postgres(String),
}

impl DatabaseTarget {
    pub fn parse(database_url: &str) -> Self {
        let url = database_url.trim();
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            return Self::Postgres(url.to_string());
        }

        let path = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url);
        let path = path.split('?').next().unwrap_or(path);

        if path == ":memory:" {
            Self::SqliteMemory
        } else {
            Self::Sqlite(PathBuf::from(path))
        }
    }
}

/// Factory for creating repository instances.
pub struct CoreFactory;

impl CoreFactory {
    /// Connect to the database named by `database_url`, prepare the schema
    /// and return the repositories.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub async fn connect(database_url: &str) -> anyhow::Result<Repos> {
        let repos = match DatabaseTarget::parse(database_url) {
            DatabaseTarget::Postgres(url) => {
                info!("Using PostgreSQL registry");
                Self::build_postgres_repos(setup_postgres_database(&url).await?)
            }
            DatabaseTarget::SqliteMemory => {
                info!("Using in-memory SQLite registry");
                Self::build_sqlite_repos(setup_in_memory_database().await?)
            }
            DatabaseTarget::Sqlite(path) => {
                info!(path = %path.display(), "Using SQLite registry");
                Self::build_sqlite_repos(setup_database(&path).await?)
            }
        };
        Ok(repos)
    }

    /// Build repositories on a `SQLite` pool.
    pub fn build_sqlite_repos(pool: SqlitePool) -> Repos {
        Repos::new(Arc::new(SqlitePlatformRepository::new(pool)))
    }

    /// Build repositories on a PostgreSQL pool.
    pub fn build_postgres_repos(pool: PgPool) -> Repos {
        Repos::new(Arc::new(PostgresPlatformRepository::new(pool)))
    }

    /// Build a complete `AppCore` from a database URL and an upstream client.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let upstream = Arc::new(ReqwestUpstreamClient::new(UpstreamClientConfig::default())?);
    /// let core = CoreFactory::build_app_core("sqlite://aigw.db", upstream).await?;
    /// ```
    pub async fn build_app_core(
        database_url: &str,
        upstream: Arc<dyn UpstreamClientPort>,
    ) -> anyhow::Result<AppCore> {
        let repos = Self::connect(database_url).await?;
        Ok(AppCore::new(repos, upstream))
    }
}
