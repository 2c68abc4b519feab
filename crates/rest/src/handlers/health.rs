//! Health check endpoint handler.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use intake_store::ComplaintStore;
use serde_json::json;
use tracing::{debug, warn};

use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Probes datastore connectivity and reports it. An unreachable datastore
/// yields a degraded 503 report, never a crash.
///
/// # HTTP Request
///
/// `GET /api/health`
///
/// # Response
///
/// - `200 OK` - datastore reachable
/// - `503 Service Unavailable` - datastore unreachable
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: ComplaintStore,
{
    debug!("Processing health check request");

    match state.store().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "OK",
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "database": "Connected",
                "mongodb": "Working",
            })),
        )
            .into_response(),
        Err(err) => {
            warn!(error = %err, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "ERROR",
                    "database": "Disconnected",
                    "error": err.to_string(),
                })),
            )
                .into_response()
        }
    }
}
