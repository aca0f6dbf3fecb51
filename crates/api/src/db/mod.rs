//! Catalog data access.
//!
//! # Backends
//!
//! Two interchangeable implementations of [`CatalogRepository`]:
//!
//! - [`PgCatalogRepository`] - `PostgreSQL` behind a bounded connection pool
//! - [`MemoryCatalogRepository`] - the fixed [`seed`] catalog held in memory
//!
//! The backend is picked once at startup by [`connect`] and shared behind an
//! `Arc<dyn CatalogRepository>`. Both apply the same [`CarFilter`] rules, so
//! handlers cannot tell which one is answering.
//!
//! # Database: `car_expo`
//!
//! ## Tables
//!
//! - `vehicle_types` - Top-level categories
//! - `subtypes` - Ordered subtype names per vehicle type
//! - `cars` - Catalog cars (`features` stored as JSON text)
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p car-expo-cli -- migrate
//! ```

pub mod memory;
pub mod postgres;
pub mod seed;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{FromRow, PgPool};
use thiserror::Error;

use car_expo_core::{Car, CarFilter, CarId, VehicleType};

use crate::config::{BackendConfig, DatabaseConfig};

pub use memory::MemoryCatalogRepository;
pub use postgres::PgCatalogRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx (unreachable, pool exhausted, query failed).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Read access to the vehicle catalog.
///
/// Implementations must agree on semantics: `list_cars` applies
/// [`CarFilter::matches`], results are ordered by id, and subtypes keep
/// their stored order.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// List every vehicle type with its subtypes.
    async fn list_all_types(&self) -> Result<Vec<VehicleType>, RepositoryError>;

    /// List the cars selected by `filter`.
    async fn list_cars(&self, filter: &CarFilter) -> Result<Vec<Car>, RepositoryError>;

    /// List every car.
    async fn list_all_cars(&self) -> Result<Vec<Car>, RepositoryError> {
        self.list_cars(&CarFilter::all()).await
    }

    /// Get a single car by id.
    async fn get_car_by_id(&self, id: CarId) -> Result<Option<Car>, RepositoryError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;

    /// Release backing resources. Called once at shutdown.
    async fn close(&self) {}
}

/// A positional query parameter.
#[derive(Debug, Clone, Copy)]
pub enum QueryParam<'q> {
    Int(i32),
    Text(&'q str),
}

/// Run a parameterized statement and map every row to `T`.
///
/// Parameters bind positionally to `$1`, `$2`, ... so values never end up in
/// the SQL text. A pooled connection is acquired for the call and returned
/// when it completes.
///
/// # Errors
///
/// Returns `sqlx::Error` if no connection can be acquired, the statement
/// fails, or a row does not decode into `T`.
pub async fn query<'q, T>(
    pool: &PgPool,
    statement: &'q str,
    params: &[QueryParam<'q>],
) -> Result<Vec<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let mut query = sqlx::query_as::<_, T>(statement);
    for param in params {
        query = match *param {
            QueryParam::Int(value) => query.bind(value),
            QueryParam::Text(value) => query.bind(value),
        };
    }
    query.fetch_all(pool).await
}

/// Create a `PostgreSQL` connection pool.
///
/// The pool never holds more than `config.max_connections` connections;
/// callers beyond that wait up to `config.acquire_timeout` for one to free up.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.max_connections.min(2))
        .acquire_timeout(config.acquire_timeout)
        .connect_with(config.connect_options()?)
        .await
}

/// Build the catalog repository selected by `backend`.
///
/// # Errors
///
/// Returns `sqlx::Error` if the postgres backend cannot connect.
pub async fn connect(backend: &BackendConfig) -> Result<Arc<dyn CatalogRepository>, sqlx::Error> {
    match backend {
        BackendConfig::Postgres(database) => {
            let pool = create_pool(database).await?;
            tracing::info!(
                max_connections = database.max_connections,
                "Database pool created"
            );
            Ok(Arc::new(PgCatalogRepository::new(pool)))
        }
        BackendConfig::Mock { latency } => {
            tracing::info!(
                latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                "Using mock catalog data (no database required)"
            );
            Ok(Arc::new(
                MemoryCatalogRepository::seeded().with_latency(*latency),
            ))
        }
    }
}
