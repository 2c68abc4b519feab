//! # intake-rest - Complaint Intake HTTP API
//!
//! This crate implements the HTTP surface of the complaint intake service:
//! clients submit complaint records, administrators list, inspect, update
//! the status of, and delete them.
//!
//! ## API Endpoints
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | GET | `/` | service metadata |
//! | GET | `/api/health` | connectivity report, 200 or 503 |
//! | POST | `/api/complaints` | 201 created record |
//! | GET | `/api/complaints` | 200 all records, newest first |
//! | GET | `/api/complaints/{id}` | 200 single record |
//! | PATCH | `/api/complaints/{id}` | 200 record with replaced status |
//! | DELETE | `/api/complaints/{id}` | 200 deletion confirmation |
//! | any | unmatched | 404 discovery payload |
//!
//! Every data endpoint answers with the `{success, message?, data?, error?}`
//! envelope; failures map through a single translation point in [`error`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use intake_rest::{create_app, ServerConfig};
//! use intake_store::backends::mongo::MongoStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = MongoStore::with_uri("mongodb://localhost:27017/complaintdb");
//!     let app = create_app(store);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! The server is configured via environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `INTAKE_SERVER_PORT` | 8080 | Server port |
//! | `INTAKE_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `INTAKE_LOG_LEVEL` | info | Log level |
//! | `INTAKE_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `INTAKE_ENABLE_CORS` | true | Enable CORS |
//! | `INTAKE_CORS_ORIGINS` | * | Allowed origins |
//! | `INTAKE_CORS_METHODS` | GET,POST,PATCH,DELETE,OPTIONS | Allowed methods |
//! | `INTAKE_CORS_HEADERS` | Content-Type,Authorization | Allowed headers |
//! | `INTAKE_DATABASE_URL` | (dev fallback) | MongoDB connection string |
//! | `INTAKE_DATABASE_NAME` | (from URL) | Database name override |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and response-envelope generation
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`validation`] - Pure input validation for submissions
//! - [`handlers`] - HTTP request handlers, one module per operation
//! - [`routing`] - Route configuration and the not-found fallback

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routing;
pub mod state;
pub mod validation;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use intake_store::ComplaintStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// Convenience wrapper around [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: ComplaintStore + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up all routes, the not-found fallback, and the middleware stack
/// (trace, timeout, CORS).
///
/// # Example
///
/// ```rust
/// use intake_rest::{create_app_with_config, ServerConfig};
/// use intake_store::backends::memory::MemoryStore;
///
/// let config = ServerConfig {
///     port: 3000,
///     ..Default::default()
/// };
/// let app = create_app_with_config(MemoryStore::new(), config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: ComplaintStore + 'static,
{
    info!(
        backend = storage.backend_name(),
        "Creating complaint intake API"
    );

    let state = AppState::new(Arc::new(storage), config.clone());
    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(
            config.request_timeout,
        )));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "intake_rest={level},intake_store={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
