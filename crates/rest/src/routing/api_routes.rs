//! Route table for the complaint intake API.

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use intake_store::ComplaintStore;

use crate::handlers;
use crate::state::AppState;

/// Creates the complete route table.
///
/// | Method | Path | Handler |
/// |--------|------|---------|
/// | GET | `/` | [`handlers::info_handler`] |
/// | GET | `/api/health` | [`handlers::health_handler`] |
/// | POST | `/api/complaints` | [`handlers::create_handler`] |
/// | GET | `/api/complaints` | [`handlers::list_handler`] |
/// | GET | `/api/complaints/{id}` | [`handlers::read_handler`] |
/// | PATCH | `/api/complaints/{id}` | [`handlers::update_handler`] |
/// | DELETE | `/api/complaints/{id}` | [`handlers::delete_handler`] |
///
/// Anything else falls through to [`handlers::not_found_handler`], which
/// reports the requested path and the full endpoint list.
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: ComplaintStore + 'static,
{
    Router::new()
        .route("/", get(handlers::info_handler))
        .route("/api/health", get(handlers::health_handler::<S>))
        .route("/api/complaints", post(handlers::create_handler::<S>))
        .route("/api/complaints", get(handlers::list_handler::<S>))
        .route("/api/complaints/{id}", get(handlers::read_handler::<S>))
        .route("/api/complaints/{id}", patch(handlers::update_handler::<S>))
        .route(
            "/api/complaints/{id}",
            delete(handlers::delete_handler::<S>),
        )
        .fallback(handlers::not_found_handler)
        .with_state(state)
}
