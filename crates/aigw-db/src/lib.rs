#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

pub use factory::{CoreFactory, DatabaseTarget};

pub use repositories::{PostgresPlatformRepository, SqlitePlatformRepository};

pub use setup::{setup_database, setup_postgres_database};
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
