//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Backend
//! - `CATALOG_BACKEND` - `postgres` (default) or `mock`
//!
//! ## Server
//! - `API_HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Listen port (default: 4000 for postgres, 4001 for mock)
//! - `STATIC_DIR` - Directory served for non-API paths (default: public)
//!
//! ## Database (postgres backend)
//! - `DATABASE_URL` - `PostgreSQL` connection string, or the parts below
//! - `DB_HOST` - Database host (default: localhost)
//! - `DB_PORT` - Database port (default: 5432)
//! - `DB_USER` - Database user (required without `DATABASE_URL`)
//! - `DB_PASS` - Database password (required without `DATABASE_URL`)
//! - `DB_NAME` - Database name (required without `DATABASE_URL`)
//! - `DB_MAX_CONNECTIONS` - Pool ceiling (default: 10)
//! - `DB_ACQUIRE_TIMEOUT_SECS` - Pool acquire timeout (default: 10)
//!
//! ## Mock backend
//! - `MOCK_LATENCY_MS` - Simulated store delay per call (default: 100)
//!
//! ## Observability
//! - `LOG_FORMAT` - `text` (default) or `json`
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

/// Default port for the store-backed server.
pub const DEFAULT_POSTGRES_PORT: u16 = 4000;
/// Default port for the mock-data server.
pub const DEFAULT_MOCK_PORT: u16 = 4001;
/// Default connection pool ceiling.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

const DEFAULT_MOCK_LATENCY_MS: u64 = 100;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Which catalog store backs the server
    pub backend: BackendConfig,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory of static frontend assets
    pub static_dir: PathBuf,
    /// Log output format
    pub log_format: LogFormat,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. production, staging)
    pub sentry_environment: Option<String>,
}

/// Catalog store selection, resolved at startup.
#[derive(Debug, Clone)]
pub enum BackendConfig {
    /// Relational store behind a connection pool.
    Postgres(DatabaseConfig),
    /// Fixed in-memory catalog.
    Mock {
        /// Delay applied to every store call
        latency: Duration,
    },
}

impl BackendConfig {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Mock { .. } => "mock",
        }
    }

    const fn default_port(&self) -> u16 {
        match self {
            Self::Postgres(_) => DEFAULT_POSTGRES_PORT,
            Self::Mock { .. } => DEFAULT_MOCK_PORT,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected 'text' or 'json', got '{other}'")),
        }
    }
}

/// `PostgreSQL` connection configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// How to reach the database
    pub connection: DatabaseConnection,
    /// Maximum number of pooled connections
    pub max_connections: u32,
    /// How long a caller waits for a free connection
    pub acquire_timeout: Duration,
}

/// Database location, either as a URL or as discrete parts.
#[derive(Debug, Clone)]
pub enum DatabaseConnection {
    /// Full connection string (contains password)
    Url(SecretString),
    /// Individual connection parameters
    Parts {
        host: String,
        port: u16,
        user: String,
        password: SecretString,
        database: String,
    },
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(env_lookup)
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match get_or_default(&lookup, "CATALOG_BACKEND", "postgres")
            .to_ascii_lowercase()
            .as_str()
        {
            "postgres" => BackendConfig::Postgres(DatabaseConfig::from_lookup(&lookup)?),
            "mock" => BackendConfig::Mock {
                latency: Duration::from_millis(parse_or_default(
                    &lookup,
                    "MOCK_LATENCY_MS",
                    DEFAULT_MOCK_LATENCY_MS,
                )?),
            },
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "CATALOG_BACKEND".to_string(),
                    format!("expected 'postgres' or 'mock', got '{other}'"),
                ));
            }
        };

        let host = parse_or_default(&lookup, "API_HOST", IpAddr::from([0, 0, 0, 0]))?;
        let port = parse_or_default(&lookup, "PORT", backend.default_port())?;
        let static_dir = PathBuf::from(get_or_default(&lookup, "STATIC_DIR", "public"));
        let log_format = parse_or_default(&lookup, "LOG_FORMAT", LogFormat::Text)?;

        Ok(Self {
            backend,
            host,
            port,
            static_dir,
            log_format,
            sentry_dsn: lookup("SENTRY_DSN"),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl DatabaseConfig {
    /// Load database configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(&env_lookup)
    }

    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let connection = match lookup("DATABASE_URL") {
            Some(url) => DatabaseConnection::Url(SecretString::from(url)),
            None => DatabaseConnection::Parts {
                host: get_or_default(lookup, "DB_HOST", "localhost"),
                port: parse_or_default(lookup, "DB_PORT", 5432)?,
                user: get_required(lookup, "DB_USER")?,
                password: SecretString::from(get_required(lookup, "DB_PASS")?),
                database: get_required(lookup, "DB_NAME")?,
            },
        };

        let max_connections =
            parse_or_default(lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "DB_MAX_CONNECTIONS".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            connection,
            max_connections,
            acquire_timeout: Duration::from_secs(parse_or_default(
                lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                10,
            )?),
        })
    }

    /// Build sqlx connect options for this database.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error::Configuration` if the connection URL is malformed.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.connection {
            DatabaseConnection::Url(url) => PgConnectOptions::from_str(url.expose_secret()),
            DatabaseConnection::Parts {
                host,
                port,
                user,
                password,
                database,
            } => Ok(PgConnectOptions::new()
                .host(host)
                .port(*port)
                .username(user)
                .password(password.expose_secret())
                .database(database)),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Read a process environment variable, treating empty values as unset.
fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Get a required variable.
fn get_required<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a variable with a default value.
fn get_or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}

/// Parse a variable, falling back to `default` when unset.
fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |value| {
        value
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}
