//! Car route handlers.
//!
//! Query values are matched case-insensitively and empty values count as
//! absent. A `subtype` without a `type` is ignored.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use car_expo_core::{Car, CarFilter, CarId};

use crate::error::{AppError, CAR_NOT_FOUND, Result};
use crate::state::AppState;

/// Query parameters for the car listing.
#[derive(Debug, Default, Deserialize)]
pub struct CarQuery {
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    pub subtype: Option<String>,
}

impl From<CarQuery> for CarFilter {
    fn from(query: CarQuery) -> Self {
        Self::new(query.vehicle_type, query.subtype)
    }
}

/// List cars, optionally narrowed by `type` and `subtype`.
///
/// A query string that cannot be parsed is treated as no filter.
#[tracing::instrument(skip(state, query))]
pub async fn index(
    State(state): State<AppState>,
    query: std::result::Result<Query<CarQuery>, QueryRejection>,
) -> Result<Json<Vec<Car>>> {
    let query = query.map(|Query(q)| q).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Ignoring unparseable car query");
        CarQuery::default()
    });
    let filter = CarFilter::from(query);

    Ok(Json(state.catalog().list_cars(&filter).await?))
}

/// Show a single car.
///
/// The id segment must be plain ASCII digits. Anything else, including a
/// numeric prefix such as `3abc`, a sign such as `+3`, or an id too large for
/// the store, is rejected with the same 404 as an unknown id rather than
/// being coerced to a number.
#[tracing::instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Car>> {
    let id = parse_car_id(&id).ok_or_else(|| AppError::NotFound(CAR_NOT_FOUND.to_owned()))?;

    Ok(Json(state.catalog().get_car(id).await?))
}

fn parse_car_id(raw: &str) -> Option<CarId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use super::{CarId, parse_car_id};
    use crate::routes::test_support::{get_json, seeded_app};

    fn ids(body: &Value) -> Vec<i64> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_i64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_list_all_cars() {
        let (status, body) = get_json(seeded_app(), "/api/cars").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec![1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn test_filter_by_type_is_case_insensitive() {
        let (_, lower) = get_json(seeded_app(), "/api/cars?type=hatchback").await;
        let (_, upper) = get_json(seeded_app(), "/api/cars?type=HATCHBACK").await;
        assert_eq!(ids(&lower), ids(&upper));
        assert!(ids(&lower).contains(&3));
        assert!(
            lower
                .as_array()
                .unwrap()
                .iter()
                .all(|c| c["type"] == "Hatchback")
        );
    }

    #[tokio::test]
    async fn test_filter_by_type_and_subtype() {
        let (_, body) = get_json(
            seeded_app(),
            "/api/cars?type=Hatchback&subtype=Compact%20Hatchback",
        )
        .await;
        assert!(ids(&body).contains(&3));

        let (status, body) =
            get_json(seeded_app(), "/api/cars?type=Hatchback&subtype=Hot%20Hatch").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!ids(&body).contains(&3));
    }

    #[tokio::test]
    async fn test_unknown_type_is_empty_list() {
        let (status, body) = get_json(seeded_app(), "/api/cars?type=Tractor").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_empty_and_lone_subtype_are_unfiltered() {
        let (_, all) = get_json(seeded_app(), "/api/cars").await;

        let (_, empty) = get_json(seeded_app(), "/api/cars?type=&subtype=").await;
        assert_eq!(ids(&empty), ids(&all));

        let (_, lone) = get_json(seeded_app(), "/api/cars?subtype=Hot%20Hatch").await;
        assert_eq!(ids(&lone), ids(&all));
    }

    #[tokio::test]
    async fn test_repeated_param_is_unfiltered() {
        let (_, all) = get_json(seeded_app(), "/api/cars").await;
        let (status, body) = get_json(seeded_app(), "/api/cars?type=SUV&type=Sedan").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), ids(&all));
    }

    #[tokio::test]
    async fn test_show_car() {
        let (status, body) = get_json(seeded_app(), "/api/cars/3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Volkswagen Golf");
        assert_eq!(body["type"], "Hatchback");
        assert_eq!(body["subtype"], "Compact Hatchback");
        assert!(body["features"].is_array());
        assert!(body["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_show_missing_car() {
        for uri in [
            "/api/cars/999",
            "/api/cars/abc",
            "/api/cars/99999999999",
            "/api/cars/3abc",
            "/api/cars/3.0",
            "/api/cars/+3",
            "/api/cars/-3",
            "/api/cars/%203",
        ] {
            let (status, body) = get_json(seeded_app(), uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body, json!({ "error": "Car not found" }), "{uri}");
        }
    }

    #[test]
    fn test_parse_car_id_accepts_only_digits() {
        assert_eq!(parse_car_id("3"), Some(CarId::new(3)));
        assert_eq!(parse_car_id("007"), Some(CarId::new(7)));
        for raw in ["", "+3", "-3", "3abc", "3.0", " 3", "99999999999"] {
            assert_eq!(parse_car_id(raw), None, "{raw:?}");
        }
    }
}
