//! In-memory catalog repository.
//!
//! Serves a fixed catalog without a database. Used by the mock backend and
//! by tests.

use std::time::Duration;

use async_trait::async_trait;

use car_expo_core::{Car, CarFilter, CarId, VehicleType};

use super::{CatalogRepository, RepositoryError, seed};

/// Repository over a fixed, in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogRepository {
    types: Vec<VehicleType>,
    cars: Vec<Car>,
    latency: Duration,
}

impl MemoryCatalogRepository {
    /// Create a repository over the given records.
    ///
    /// Records are kept in id order regardless of input order.
    #[must_use]
    pub fn new(mut types: Vec<VehicleType>, mut cars: Vec<Car>) -> Self {
        types.sort_by_key(|t| t.id);
        cars.sort_by_key(|c| c.id);

        Self {
            types,
            cars,
            latency: Duration::ZERO,
        }
    }

    /// Create a repository over the built-in catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::vehicle_types(), seed::cars())
    }

    /// Delay every call by `latency`, mimicking a remote store.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl CatalogRepository for MemoryCatalogRepository {
    async fn list_all_types(&self) -> Result<Vec<VehicleType>, RepositoryError> {
        self.simulate_latency().await;
        Ok(self.types.clone())
    }

    async fn list_cars(&self, filter: &CarFilter) -> Result<Vec<Car>, RepositoryError> {
        self.simulate_latency().await;
        Ok(self
            .cars
            .iter()
            .filter(|car| filter.matches(car))
            .cloned()
            .collect())
    }

    async fn get_car_by_id(&self, id: CarId) -> Result<Option<Car>, RepositoryError> {
        self.simulate_latency().await;
        Ok(self.cars.iter().find(|car| car.id == id).cloned())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ids(cars: &[Car]) -> Vec<i32> {
        cars.iter().map(|c| c.id.as_i32()).collect()
    }

    #[tokio::test]
    async fn test_list_all_cars() {
        let repo = MemoryCatalogRepository::seeded();
        let cars = repo.list_cars(&CarFilter::all()).await.unwrap();
        assert_eq!(ids(&cars), vec![1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn test_list_cars_by_type() {
        let repo = MemoryCatalogRepository::seeded();
        let cars = repo.list_cars(&CarFilter::by_type("suv")).await.unwrap();
        assert_eq!(ids(&cars), vec![1, 5]);
    }

    #[tokio::test]
    async fn test_list_cars_by_type_and_subtype() {
        let repo = MemoryCatalogRepository::seeded();
        let cars = repo
            .list_cars(&CarFilter::by_type_and_subtype("Sedan", "luxury sedan"))
            .await
            .unwrap();
        assert_eq!(ids(&cars), vec![6]);
    }

    #[tokio::test]
    async fn test_get_car_by_id() {
        let repo = MemoryCatalogRepository::seeded();
        let car = repo.get_car_by_id(CarId::new(4)).await.unwrap().unwrap();
        assert_eq!(car.name, "BMW 4 Series");
        assert!(repo.get_car_by_id(CarId::new(999)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_records_sorted_by_id() {
        let mut cars = seed::cars();
        cars.reverse();
        let repo = MemoryCatalogRepository::new(seed::vehicle_types(), cars);

        let listed = repo.list_cars(&CarFilter::all()).await.unwrap();
        assert_eq!(ids(&listed), vec![1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let repo = MemoryCatalogRepository::seeded().with_latency(Duration::from_millis(100));

        let started = tokio::time::Instant::now();
        repo.list_all_types().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(100));
    }
}
