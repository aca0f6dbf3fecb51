//! Catalog error types.

use thiserror::Error;

use car_expo_core::CarId;

use crate::db::RepositoryError;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No car has the requested id.
    #[error("car {0} not found")]
    NotFound(CarId),

    /// The backing store failed (unreachable, pool exhausted, query error).
    #[error("catalog store error: {0}")]
    Internal(#[from] RepositoryError),
}
