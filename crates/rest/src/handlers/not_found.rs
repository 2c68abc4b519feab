//! Fallback handler for unmatched routes.

use axum::{
    Json,
    extract::OriginalUri,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

/// Every route the service exposes, listed in the fallback response so a
/// caller who mistyped a path can self-correct.
pub const AVAILABLE_ENDPOINTS: [&str; 7] = [
    "GET /",
    "GET /api/health",
    "POST /api/complaints",
    "GET /api/complaints",
    "GET /api/complaints/{id}",
    "PATCH /api/complaints/{id}",
    "DELETE /api/complaints/{id}",
];

/// Handler for any request that matches no route.
///
/// # Response
///
/// - `404 Not Found` - `{success: false, message, requestedPath,
///   availableEndpoints}`
pub async fn not_found_handler(OriginalUri(uri): OriginalUri) -> Response {
    debug!(path = %uri.path(), "unmatched route");

    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "Route not found",
            "requestedPath": uri.path(),
            "availableEndpoints": AVAILABLE_ENDPOINTS,
        })),
    )
        .into_response()
}
