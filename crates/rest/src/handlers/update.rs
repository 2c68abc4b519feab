//! Status update handler.

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use intake_store::{ComplaintStatus, ComplaintStore};
use serde_json::{Value, json};
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

const INVALID_STATUS: &str = "Invalid status. Must be: Pending, In Progress, or Resolved";

/// Handler for updating a complaint's status.
///
/// Accepts exactly the three wire statuses (`Pending`, `In Progress`,
/// `Resolved`); anything else is rejected before the datastore is touched.
/// The body is inspected as raw JSON so that a missing, non-string, or
/// unrecognized `status` all yield the same 400 envelope.
///
/// # HTTP Request
///
/// `PATCH /api/complaints/{id}` with body `{status}`
///
/// # Response
///
/// - `200 OK` - `{success: true, message, data}` with the updated record
/// - `400 Bad Request` - missing, non-string, or unrecognized status
/// - `404 Not Found` - no record matches the id
/// - `500 Internal Server Error` - persistence failed
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Response>
where
    S: ComplaintStore,
{
    let status = body
        .get("status")
        .and_then(Value::as_str)
        .and_then(|raw| ComplaintStatus::from_str(raw).ok())
        .ok_or_else(|| ApiError::Validation {
            message: INVALID_STATUS.to_string(),
        })?;

    match state.store().update_status(&id, status).await? {
        Some(complaint) => {
            debug!(%id, status = %status, "complaint status updated");
            Ok(Json(json!({
                "success": true,
                "message": "Status updated successfully",
                "data": complaint,
            }))
            .into_response())
        }
        None => {
            debug!(%id, "complaint not found for status update");
            Err(ApiError::NotFound)
        }
    }
}
