//! Seed the database with the built-in catalog.
//!
//! Every statement is an upsert keyed on the record id, so running the
//! command twice leaves the same rows behind. Subtypes are rewritten per
//! type so their stored order always matches the built-in order.

use sqlx::{Postgres, Transaction};
use tracing::info;

use car_expo_api::{config::DatabaseConfig, db, db::seed};
use car_expo_core::{Car, VehicleType, encode_features};

use super::CommandError;

/// Write the built-in catalog, optionally clearing the tables first.
///
/// Runs in a single transaction; on error nothing is written.
///
/// # Errors
///
/// Returns an error if configuration is missing or a statement fails.
pub async fn run(reset: bool) -> Result<(), CommandError> {
    let config = DatabaseConfig::from_env()?;
    let pool = db::create_pool(&config).await?;
    info!("Connected to database");

    let mut tx = pool.begin().await?;

    if reset {
        sqlx::query("TRUNCATE cars, subtypes, vehicle_types")
            .execute(&mut *tx)
            .await?;
        info!("Cleared catalog tables");
    }

    let types = seed::vehicle_types();
    for vehicle_type in &types {
        upsert_type(&mut tx, vehicle_type).await?;
    }

    let cars = seed::cars();
    for car in &cars {
        upsert_car(&mut tx, car).await?;
    }

    tx.commit().await?;
    pool.close().await;

    info!(types = types.len(), cars = cars.len(), reset, "Seeding complete");
    Ok(())
}

async fn upsert_type(
    tx: &mut Transaction<'_, Postgres>,
    vehicle_type: &VehicleType,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO vehicle_types (id, name, description) VALUES ($1, $2, $3) \
         ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, description = EXCLUDED.description",
    )
    .bind(vehicle_type.id)
    .bind(&vehicle_type.name)
    .bind(&vehicle_type.description)
    .execute(&mut **tx)
    .await?;

    sqlx::query("DELETE FROM subtypes WHERE type_id = $1")
        .bind(vehicle_type.id)
        .execute(&mut **tx)
        .await?;

    for (position, name) in (0_i32..).zip(&vehicle_type.subtypes) {
        sqlx::query("INSERT INTO subtypes (type_id, name, position) VALUES ($1, $2, $3)")
            .bind(vehicle_type.id)
            .bind(name)
            .bind(position)
            .execute(&mut **tx)
            .await?;
    }

    Ok(())
}

async fn upsert_car(tx: &mut Transaction<'_, Postgres>, car: &Car) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO cars \
             (id, name, vehicle_type, subtype, short_desc, description, features, image_url, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
         ON CONFLICT (id) DO UPDATE SET \
             name = EXCLUDED.name, \
             vehicle_type = EXCLUDED.vehicle_type, \
             subtype = EXCLUDED.subtype, \
             short_desc = EXCLUDED.short_desc, \
             description = EXCLUDED.description, \
             features = EXCLUDED.features, \
             image_url = EXCLUDED.image_url, \
             created_at = EXCLUDED.created_at",
    )
    .bind(car.id)
    .bind(&car.name)
    .bind(&car.vehicle_type)
    .bind(&car.subtype)
    .bind(&car.short_desc)
    .bind(&car.description)
    .bind(encode_features(&car.features))
    .bind(&car.image_url)
    .bind(car.created_at)
    .execute(&mut **tx)
    .await?;

    Ok(())
}
