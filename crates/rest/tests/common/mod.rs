//! Shared test infrastructure for the REST API suites.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{Value, json};

use intake_rest::{AppState, ServerConfig, routing};
use intake_store::backends::memory::MemoryStore;

/// Creates a test server over an in-memory store, returning both so tests
/// can inspect the store behind the API.
pub fn create_test_server() -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(Arc::clone(&store), ServerConfig::for_testing());
    let router = routing::create_routes(state);
    let server = TestServer::new(router).expect("Failed to create test server");
    (server, store)
}

/// A submission that passes every validation rule.
pub fn valid_submission() -> Value {
    json!({
        "name": "Ravi Kumar",
        "mobile": "9876543210",
        "email": "ravi@example.com",
        "address": "12 MG Road, Bengaluru",
        "complaint": "Street light not working",
    })
}

/// Submits a complaint and returns the stored record from the response.
pub async fn submit_complaint(server: &TestServer, body: Value) -> Value {
    let response = server.post("/api/complaints").json(&body).await;
    response.assert_status(http::StatusCode::CREATED);
    response.json::<Value>()["data"].clone()
}
