//! Catalog service.
//!
//! Read-only operations over vehicle types and cars. The service does not
//! know which store backs it; it is handed an `Arc<dyn CatalogRepository>`
//! at startup.

mod error;

pub use error::CatalogError;

use std::sync::Arc;

use car_expo_core::{Car, CarFilter, CarId, VehicleType};

use crate::db::{CatalogRepository, RepositoryError};

/// Catalog service.
///
/// Cheap to clone; clones share the same repository.
#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    /// Create a new catalog service over `repository`.
    #[must_use]
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    /// List every vehicle type with its subtypes in stored order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Internal` if the store fails.
    pub async fn list_types(&self) -> Result<Vec<VehicleType>, CatalogError> {
        Ok(self.repository.list_all_types().await?)
    }

    /// List the cars selected by `filter`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Internal` if the store fails.
    pub async fn list_cars(&self, filter: &CarFilter) -> Result<Vec<Car>, CatalogError> {
        let cars = if filter.is_unfiltered() {
            self.repository.list_all_cars().await?
        } else {
            self.repository.list_cars(filter).await?
        };
        Ok(cars)
    }

    /// Get a single car.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no car has `id`.
    /// Returns `CatalogError::Internal` if the store fails.
    pub async fn get_car(&self, id: CarId) -> Result<Car, CatalogError> {
        self.repository
            .get_car_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound(id))
    }

    /// Check that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns the repository error if the store cannot be reached.
    pub async fn ping(&self) -> Result<(), RepositoryError> {
        self.repository.ping().await
    }

    /// Release the backing store. Call once, after the server has stopped.
    pub async fn shutdown(&self) {
        self.repository.close().await;
    }
}
