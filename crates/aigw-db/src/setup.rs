//! Database setup and initialization.
//!
//! Entry points call one of the `setup_*` functions with the resolved
//! location and receive a pool whose schema is ready to use. All schema
//! statements use `IF NOT EXISTS` and are safe to run on every start.

use std::path::Path;

use anyhow::Result;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::debug;

/// Maximum PostgreSQL connections held by the pool.
const POSTGRES_MAX_CONNECTIONS: u32 = 5;

/// Sets up the `SQLite` database and ensures the schema exists.
///
/// Creates the parent directory and the database file when missing.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or created, or if schema
/// creation fails.
///
/// # Example
///
/// ```rust,no_run
/// use aigw_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database(Path::new("/var/lib/aigw/aigw.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await?;

    create_sqlite_schema(&pool).await?;
    debug!(path = %db_path.display(), "SQLite database ready");

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    setup_in_memory_database().await
}

/// In-memory `SQLite` with the full schema. Contents vanish with the pool.
///
/// The database lives only while some connection is open, so the pool
/// keeps one connection for its whole life instead of reaping idle ones.
pub(crate) async fn setup_in_memory_database() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    create_sqlite_schema(&pool).await?;
    Ok(pool)
}

/// Connects to PostgreSQL and ensures the schema exists.
///
/// # Errors
///
/// Returns an error if the server is unreachable or schema creation fails.
pub async fn setup_postgres_database(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(POSTGRES_MAX_CONNECTIONS)
        .connect(database_url)
        .await?;

    create_postgres_schema(&pool).await?;
    debug!("PostgreSQL database ready");

    Ok(pool)
}

async fn create_sqlite_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS ai_platform (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            platform_type TEXT NOT NULL DEFAULT 'UNSPECIFIED',
            url TEXT NOT NULL,
            access_key TEXT NOT NULL,
            display_name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            model TEXT NOT NULL DEFAULT '',
            created_ts BIGINT NOT NULL,
            updated_ts BIGINT NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    // Listing order
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_ai_platform_created_ts ON ai_platform(created_ts DESC, id DESC)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_postgres_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS ai_platform (
            id SERIAL PRIMARY KEY,
            platform_type TEXT NOT NULL DEFAULT 'UNSPECIFIED',
            url TEXT NOT NULL,
            access_key TEXT NOT NULL,
            display_name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            model TEXT NOT NULL DEFAULT '',
            created_ts BIGINT NOT NULL,
            updated_ts BIGINT NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_ai_platform_created_ts ON ai_platform(created_ts DESC, id DESC)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
