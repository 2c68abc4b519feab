//! Complaint submission handler.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use intake_store::ComplaintStore;
use serde_json::json;
use tracing::debug;

use crate::error::ApiResult;
use crate::state::AppState;
use crate::validation::{self, ComplaintSubmission};

/// Handler for complaint submission.
///
/// Validates the submission (required fields, mobile format, email format,
/// in that order - first failure wins), then persists a new record with a
/// generated id, status `Pending`, and the current timestamp.
///
/// # HTTP Request
///
/// `POST /api/complaints` with body
/// `{name, mobile, email, address, complaint}`
///
/// # Response
///
/// - `201 Created` - `{success: true, message, data}` with the stored record
/// - `400 Bad Request` - validation failed, message names the rule
/// - `500 Internal Server Error` - persistence failed
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    Json(submission): Json<ComplaintSubmission>,
) -> ApiResult<Response>
where
    S: ComplaintStore,
{
    let draft = validation::validate(&submission)?;
    let stored = state.store().insert(draft).await?;

    debug!(id = %stored.id, "complaint submitted");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Complaint submitted successfully",
            "data": stored,
        })),
    )
        .into_response())
}
