//! HTTP middleware stack for the API.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. CORS (any origin)
//! 3. `TraceLayer` (request span with method, uri, status, latency)
//! 4. Request ID (records onto the `TraceLayer` span)

pub mod request_id;

pub use request_id::request_id_middleware;
