//! Vehicle type route handlers.

use axum::{Json, extract::State};

use car_expo_core::VehicleType;

use crate::error::Result;
use crate::state::AppState;

/// List every vehicle type with its subtypes.
#[tracing::instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<VehicleType>>> {
    Ok(Json(state.catalog().list_types().await?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::test_support::{get_json, seeded_app};

    #[tokio::test]
    async fn test_types_wire_shape() {
        let (status, body) = get_json(seeded_app(), "/api/types").await;
        assert_eq!(status, StatusCode::OK);

        let types = body.as_array().unwrap();
        assert_eq!(types.len(), 4);

        let hatchback = types.iter().find(|t| t["type"] == "Hatchback").unwrap();
        assert_eq!(
            hatchback["subtypes"],
            json!(["Subcompact Hatchback", "Compact Hatchback", "Hot Hatch"])
        );
        assert!(hatchback["id"].is_i64());
        assert!(hatchback.get("name").is_none());
    }
}
