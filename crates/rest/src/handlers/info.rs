//! Service metadata handler.

use axum::{Json, response::IntoResponse};
use serde_json::json;

/// Handler for the root path.
///
/// Returns static service metadata: name, running status, version, and the
/// available endpoints. Requires no datastore access.
///
/// # HTTP Request
///
/// `GET /`
pub async fn info_handler() -> impl IntoResponse {
    Json(json!({
        "message": "Complaint Intake Service API",
        "status": "Running",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "submit": "POST /api/complaints",
            "getAll": "GET /api/complaints",
            "getOne": "GET /api/complaints/{id}",
            "update": "PATCH /api/complaints/{id}",
            "delete": "DELETE /api/complaints/{id}",
            "health": "GET /api/health",
        },
    }))
}
