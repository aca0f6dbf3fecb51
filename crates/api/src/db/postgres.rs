//! `PostgreSQL` catalog repository.
//!
//! All statements go through [`super::query`] with positional parameters.
//! Type and subtype filters compare `lower()` on both sides so matching is
//! case-insensitive, same as [`CarFilter::matches`].

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use car_expo_core::{Car, CarFilter, CarId, VehicleType, VehicleTypeId, decode_features};

use super::{CatalogRepository, QueryParam, RepositoryError, query};

const CAR_COLUMNS: &str = "id, name, vehicle_type, subtype, short_desc, description, \
                           features, image_url, created_at";

/// Repository for catalog reads against `PostgreSQL`.
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    /// Create a new repository over `pool`.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct TypeRow {
    id: VehicleTypeId,
    name: String,
    description: Option<String>,
}

#[derive(FromRow)]
struct SubtypeRow {
    type_id: VehicleTypeId,
    name: String,
}

#[derive(FromRow)]
struct CarRow {
    id: CarId,
    name: String,
    vehicle_type: String,
    subtype: String,
    short_desc: Option<String>,
    description: Option<String>,
    features: Option<String>,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<CarRow> for Car {
    fn from(row: CarRow) -> Self {
        let features = decode_features(row.features.as_deref()).unwrap_or_else(|e| {
            tracing::warn!(car_id = %row.id, error = %e, "Serving empty feature list");
            Vec::new()
        });

        Self {
            id: row.id,
            name: row.name,
            vehicle_type: row.vehicle_type,
            subtype: row.subtype,
            short_desc: row.short_desc,
            description: row.description,
            features,
            image_url: row.image_url,
            created_at: row.created_at,
        }
    }
}

/// Attach subtype names to their types, keeping row order within each type.
fn assemble_types(types: Vec<TypeRow>, subtypes: Vec<SubtypeRow>) -> Vec<VehicleType> {
    let mut by_type: HashMap<VehicleTypeId, Vec<String>> = HashMap::new();
    for subtype in subtypes {
        by_type.entry(subtype.type_id).or_default().push(subtype.name);
    }

    types
        .into_iter()
        .map(|row| VehicleType {
            subtypes: by_type.remove(&row.id).unwrap_or_default(),
            id: row.id,
            name: row.name,
            description: row.description,
        })
        .collect()
}

/// Build the statement and parameters for a filtered car listing.
fn car_listing(filter: &CarFilter) -> (String, Vec<QueryParam<'_>>) {
    match (filter.vehicle_type(), filter.subtype()) {
        (Some(vehicle_type), Some(subtype)) => (
            format!(
                "SELECT {CAR_COLUMNS} FROM cars \
                 WHERE lower(vehicle_type) = lower($1) AND lower(subtype) = lower($2) \
                 ORDER BY id"
            ),
            vec![QueryParam::Text(vehicle_type), QueryParam::Text(subtype)],
        ),
        (Some(vehicle_type), None) => (
            format!(
                "SELECT {CAR_COLUMNS} FROM cars WHERE lower(vehicle_type) = lower($1) ORDER BY id"
            ),
            vec![QueryParam::Text(vehicle_type)],
        ),
        (None, _) => (format!("SELECT {CAR_COLUMNS} FROM cars ORDER BY id"), Vec::new()),
    }
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    async fn list_all_types(&self) -> Result<Vec<VehicleType>, RepositoryError> {
        let types: Vec<TypeRow> = query(
            &self.pool,
            "SELECT id, name, description FROM vehicle_types ORDER BY id",
            &[],
        )
        .await?;

        let subtypes: Vec<SubtypeRow> = query(
            &self.pool,
            "SELECT type_id, name FROM subtypes ORDER BY type_id, position, id",
            &[],
        )
        .await?;

        Ok(assemble_types(types, subtypes))
    }

    async fn list_cars(&self, filter: &CarFilter) -> Result<Vec<Car>, RepositoryError> {
        let (statement, params) = car_listing(filter);
        let rows: Vec<CarRow> = query(&self.pool, &statement, &params).await?;

        tracing::debug!(
            vehicle_type = filter.vehicle_type(),
            subtype = filter.subtype(),
            count = rows.len(),
            "Listed cars"
        );

        Ok(rows.into_iter().map(Car::from).collect())
    }

    async fn get_car_by_id(&self, id: CarId) -> Result<Option<Car>, RepositoryError> {
        let statement = format!("SELECT {CAR_COLUMNS} FROM cars WHERE id = $1");
        let rows: Vec<CarRow> =
            query(&self.pool, &statement, &[QueryParam::Int(id.as_i32())]).await?;

        Ok(rows.into_iter().next().map(Car::from))
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}
