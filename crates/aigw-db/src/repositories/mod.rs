//! Repository implementations.
//!
//! These implementations encapsulate all SQL queries and database access.
//! Pools are confined to this module and never exposed through the port
//! trait signatures.

mod postgres_platform_repository;
mod row_mappers;
mod sqlite_platform_repository;

pub use postgres_platform_repository::PostgresPlatformRepository;
pub use sqlite_platform_repository::SqlitePlatformRepository;
