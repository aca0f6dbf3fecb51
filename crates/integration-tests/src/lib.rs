//! Integration tests for Car Expo.
//!
//! # Running Tests
//!
//! ```bash
//! # Mock-backend tests (no database needed)
//! cargo test -p car-expo-integration-tests
//!
//! # Postgres-backed tests (database migrated and seeded first)
//! DATABASE_URL=postgres://... cargo test -p car-expo-integration-tests -- --ignored
//! ```
//!
//! Each test spawns its own server on an ephemeral port via [`TestServer`].

use std::{io, net::SocketAddr, path::PathBuf};

use reqwest::Client;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

use car_expo_api::{
    config::{ApiConfig, ConfigError},
    db, routes,
    services::catalog::CatalogService,
    state::AppState,
};

/// Errors raised while starting a test server.
#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("catalog store unavailable: {0}")]
    Store(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// An API server running in the test process.
pub struct TestServer {
    addr: SocketAddr,
    client: Client,
    static_dir: PathBuf,
    state: AppState,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

/// Marker text written into the static directory's `index.html`.
pub const STATIC_INDEX_MARKER: &str = "car-expo test frontend";

impl TestServer {
    /// Spawn a server over the built-in mock catalog with no simulated latency.
    ///
    /// # Errors
    ///
    /// Returns `SpawnError` if the listener cannot bind or the static
    /// directory cannot be written.
    pub async fn spawn_mock() -> Result<Self, SpawnError> {
        Self::spawn(&[("CATALOG_BACKEND", "mock"), ("MOCK_LATENCY_MS", "0")]).await
    }

    /// Spawn a server configured from `vars`, falling back to the process
    /// environment for anything not listed.
    ///
    /// # Errors
    ///
    /// Returns `SpawnError` if configuration is invalid, the store cannot be
    /// opened, or the listener cannot bind.
    pub async fn spawn(vars: &[(&str, &str)]) -> Result<Self, SpawnError> {
        let static_dir =
            std::env::temp_dir().join(format!("car-expo-static-{}", uuid::Uuid::new_v4()));
        tokio::fs::create_dir_all(&static_dir).await?;
        tokio::fs::write(
            static_dir.join("index.html"),
            format!("<!doctype html><title>{STATIC_INDEX_MARKER}</title>"),
        )
        .await?;

        let static_dir_text = static_dir.display().to_string();
        let config = ApiConfig::from_lookup(|key: &str| {
            if key == "STATIC_DIR" {
                return Some(static_dir_text.clone());
            }
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_owned())
                .or_else(|| std::env::var(key).ok().filter(|v| !v.is_empty()))
        })?;

        let repository = db::connect(&config.backend).await?;
        let state = AppState::new(config, CatalogService::new(repository));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let (shutdown, signal) = oneshot::channel::<()>();
        let app = routes::app(state.clone());
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = signal.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            client: Client::new(),
            static_dir,
            state,
            shutdown: Some(shutdown),
            handle: Some(handle),
        })
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Shared HTTP client.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// Stop accepting requests, wait for the server task, then release the
    /// store.
    pub async fn stop(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
        self.state.catalog().shutdown().await;
        let _ = tokio::fs::remove_dir_all(&self.static_dir).await;
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}
