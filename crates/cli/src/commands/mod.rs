//! CLI command implementations.

pub mod migrate;
pub mod seed;
pub mod show;

use car_expo_api::config::ConfigError;
use car_expo_api::services::catalog::CatalogError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
