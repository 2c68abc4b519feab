//! Complaint deletion handler.

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

/// Handler for deleting a complaint by id.
///
/// Deletion is permanent. A repeated delete of the same id reports 404,
/// the same as an id that never existed.
///
/// # HTTP Request
///
/// `DELETE /api/complaints/{id}`
///
/// # Response
///
/// - `200 OK` - `{success: true, message}`
/// - `404 Not Found` - no record matches the id
/// - `500 Internal Server Error` - persistence failed
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> ApiResult<Response>
where
    S: ComplaintStore,
{
    if state.store().delete(&id).await? {
        debug!(%id, "complaint deleted");
        Ok(Json(json!({
            "success": true,
            "message": "Complaint deleted successfully",
        }))
        .into_response())
    } else {
        debug!(%id, "complaint not found for deletion");
        Err(ApiError::NotFound)
    }
}
