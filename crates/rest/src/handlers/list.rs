//! Complaint listing handler.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use intake_store::ComplaintStore;
use serde_json::json;
use tracing::debug;

use crate::error::ApiResult;
use crate::state::AppState;

/// Handler for listing all complaints.
///
/// Returns every record, newest first, plus a count.
///
/// # HTTP Request
///
/// `GET /api/complaints`
///
/// # Response
///
/// - `200 OK` - `{success: true, count, data: [...]}`
/// - `500 Internal Server Error` - persistence failed
pub async fn list_handler<S>(State(state): State<AppState<S>>) -> ApiResult<Response>
where
    S: ComplaintStore,
{
    let complaints = state.store().list().await?;

    debug!(count = complaints.len(), "complaints listed");

    Ok(Json(json!({
        "success": true,
        "count": complaints.len(),
        "data": complaints,
    }))
    .into_response())
}
