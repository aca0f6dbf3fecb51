//! Catalog summary command.
//!
//! Reads through the same store and catalog service the API uses, so a
//! clean run means the read path works end to end for the configured
//! backend.

use car_expo_api::{config::ApiConfig, db, services::catalog::CatalogService};
use car_expo_core::CarFilter;

use super::CommandError;

/// Print each vehicle type with its subtypes and car count.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the store cannot be read.
#[allow(clippy::print_stdout)]
pub async fn run() -> Result<(), CommandError> {
    let config = ApiConfig::from_env()?;
    let catalog = CatalogService::new(db::connect(&config.backend).await?);

    let result = summarize(&catalog).await;
    catalog.shutdown().await;
    let lines = result?;

    println!("Catalog ({} backend)", config.backend.name());
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

async fn summarize(catalog: &CatalogService) -> Result<Vec<String>, CommandError> {
    let types = catalog.list_types().await?;
    let mut lines = Vec::with_capacity(types.len() + 1);

    for vehicle_type in &types {
        let cars = catalog
            .list_cars(&CarFilter::by_type(vehicle_type.name.clone()))
            .await?;
        lines.push(format!(
            "  {:<12} {} cars  [{}]",
            vehicle_type.name,
            cars.len(),
            vehicle_type.subtypes.join(", ")
        ));
    }

    let total = catalog.list_cars(&CarFilter::all()).await?.len();
    lines.push(format!("  {} types, {total} cars", types.len()));
    Ok(lines)
}
