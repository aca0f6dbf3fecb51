//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! car-expo migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string, or
//! - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASS`, `DB_NAME`
//!
//! Migration files live in `crates/api/migrations/`.

use tracing::info;

use car_expo_api::{config::DatabaseConfig, db};

use super::CommandError;

/// Run the catalog migrations.
///
/// # Errors
///
/// Returns an error if configuration is missing, the database is
/// unreachable, or a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let config = DatabaseConfig::from_env()?;

    info!("Connecting to catalog database...");
    let pool = db::create_pool(&config).await?;

    info!("Running catalog migrations...");
    sqlx::migrate!("../api/migrations").run(&pool).await?;

    pool.close().await;
    info!("Catalog migrations complete");
    Ok(())
}
