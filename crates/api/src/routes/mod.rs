//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health              - Liveness check
//! GET  /health/ready        - Readiness check (pings the catalog store)
//!
//! # Catalog API
//! GET  /api/types           - Vehicle types with their subtypes
//! GET  /api/cars            - Car listing (?type=...&subtype=...)
//! GET  /api/cars/{id}       - Car detail
//!
//! Anything else falls through to the static file directory.
//! ```

pub mod cars;
pub mod health;
pub mod types;

use std::time::Duration;

use axum::{Router, routing::get};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultOnResponse, OnResponse, TraceLayer},
};
use tracing::Span;

use crate::middleware::request_id_middleware;
use crate::state::AppState;

/// Create the catalog API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/types", get(types::index))
        .route("/cars", get(cars::index))
        .route("/cars/{id}", get(cars::show))
}

/// Create all routes for the API server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/api", api_routes())
}

/// Build the full application: routes, static fallback and middleware stack.
///
/// Sentry layers are added by the binary on top of this, so tests can drive
/// the router without a Sentry client.
pub fn app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config().static_dir);

    routes()
        .fallback_service(static_files)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: Duration, span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::ApiConfig;
    use crate::db::{CatalogRepository, MemoryCatalogRepository};
    use crate::services::catalog::CatalogService;
    use crate::state::AppState;

    /// Mock-backend config with no latency and a throwaway static dir.
    pub fn test_config() -> ApiConfig {
        ApiConfig::from_lookup(|key: &str| match key {
            "CATALOG_BACKEND" => Some("mock".to_owned()),
            "MOCK_LATENCY_MS" => Some("0".to_owned()),
            "STATIC_DIR" => Some(
                std::env::temp_dir()
                    .join("car-expo-static-test")
                    .display()
                    .to_string(),
            ),
            _ => None,
        })
        .unwrap()
    }

    pub fn app_with(repository: Arc<dyn CatalogRepository>) -> axum::Router {
        let state = AppState::new(test_config(), CatalogService::new(repository));
        super::app(state)
    }

    pub fn seeded_app() -> axum::Router {
        app_with(Arc::new(MemoryCatalogRepository::seeded()))
    }

    /// Issue a GET and decode the JSON body.
    pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }
}
