//! Single-complaint lookup handler.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use intake_store::ComplaintStore;
use serde_json::json;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Handler for fetching a single complaint by id.
///
/// # HTTP Request
///
/// `GET /api/complaints/{id}`
///
/// # Response
///
/// - `200 OK` - `{success: true, data}`
/// - `404 Not Found` - no record matches the id (malformed ids included)
/// - `500 Internal Server Error` - persistence failed
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> ApiResult<Response>
where
    S: ComplaintStore,
{
    match state.store().find(&id).await? {
        Some(complaint) => {
            debug!(%id, "complaint found");
            Ok(Json(json!({ "success": true, "data": complaint })).into_response())
        }
        None => {
            debug!(%id, "complaint not found");
            Err(ApiError::NotFound)
        }
    }
}
