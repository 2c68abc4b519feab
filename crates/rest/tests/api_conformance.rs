//! End-to-end conformance tests for the complaint intake API.
//!
//! Exercises every endpoint through the full router, including the
//! middleware stack and the not-found fallback, against the in-memory
//! backend.

mod common;

use chrono::{DateTime, Utc};
use http::StatusCode;
use serde_json::{Value, json};

use common::{create_test_server, submit_complaint, valid_submission};

#[tokio::test]
async fn test_root_returns_service_metadata() {
    let (server, _) = create_test_server();

    let response = server.get("/").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"], "Complaint Intake Service API");
    assert_eq!(body["status"], "Running");
    assert!(body["version"].is_string());
    assert_eq!(body["endpoints"]["submit"], "POST /api/complaints");
    assert_eq!(body["endpoints"]["health"], "GET /api/health");
    assert_eq!(body["endpoints"].as_object().unwrap().len(), 6);
}

#[tokio::test]
async fn test_health_reports_connected() {
    let (server, _) = create_test_server();

    let response = server.get("/api/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "OK");
    assert_eq!(body["database"], "Connected");
    assert_eq!(body["mongodb"], "Working");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_submit_complaint_returns_created_record() {
    let (server, store) = create_test_server();
    let start = Utc::now();

    let response = server.post("/api/complaints").json(&valid_submission()).await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Complaint submitted successfully");

    let data = &body["data"];
    assert!(!data["id"].as_str().unwrap().is_empty());
    assert_eq!(data["name"], "Ravi Kumar");
    assert_eq!(data["mobile"], "9876543210");
    assert_eq!(data["email"], "ravi@example.com");
    assert_eq!(data["status"], "Pending");

    let created_at: DateTime<Utc> = data["createdAt"]
        .as_str()
        .unwrap()
        .parse()
        .expect("createdAt parses as RFC 3339");
    assert!(created_at >= start);

    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_submit_rejects_missing_fields() {
    let (server, store) = create_test_server();

    let mut body = valid_submission();
    body.as_object_mut().unwrap().remove("address");

    let response = server.post("/api/complaints").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "All fields are required");

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_submit_rejects_blank_fields() {
    let (server, store) = create_test_server();

    let mut body = valid_submission();
    body["name"] = json!("   ");

    let response = server.post("/api/complaints").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "All fields are required");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_submit_rejects_bad_mobile() {
    let (server, store) = create_test_server();

    let mut body = valid_submission();
    body["mobile"] = json!("12345");

    let response = server.post("/api/complaints").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Mobile number must be exactly 10 digits"
    );
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_submit_rejects_bad_email() {
    let (server, store) = create_test_server();

    let mut body = valid_submission();
    body["email"] = json!("not-an-email");

    let response = server.post("/api/complaints").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Please provide a valid email address"
    );
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_submit_rejects_padded_mobile() {
    let (server, store) = create_test_server();

    // Surrounding whitespace is not trimmed before the format check.
    let mut body = valid_submission();
    body["mobile"] = json!(" 9876543210 ");

    let response = server.post("/api/complaints").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Mobile number must be exactly 10 digits"
    );
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_submit_reports_first_failing_rule() {
    let (server, _) = create_test_server();

    // Both mobile and email are invalid; the mobile rule runs first.
    let mut body = valid_submission();
    body["mobile"] = json!("abc");
    body["email"] = json!("nope");

    let response = server.post("/api/complaints").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Mobile number must be exactly 10 digits"
    );
}

#[tokio::test]
async fn test_list_returns_newest_first_with_count() {
    let (server, _) = create_test_server();

    for name in ["A", "B", "C"] {
        let mut body = valid_submission();
        body["name"] = json!(name);
        submit_complaint(&server, body).await;
    }

    let response = server.get("/api/complaints").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 3);

    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["C", "B", "A"]);
}

#[tokio::test]
async fn test_list_empty_store() {
    let (server, _) = create_test_server();

    let response = server.get("/api/complaints").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["count"], 0);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_get_single_complaint() {
    let (server, _) = create_test_server();
    let stored = submit_complaint(&server, valid_submission()).await;
    let id = stored["id"].as_str().unwrap();

    let response = server.get(&format!("/api/complaints/{id}")).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], stored);
}

#[tokio::test]
async fn test_get_missing_complaint_is_404() {
    let (server, _) = create_test_server();

    let response = server.get("/api/complaints/no-such-id").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Complaint not found");
}

#[tokio::test]
async fn test_update_status_to_resolved() {
    let (server, _) = create_test_server();
    let stored = submit_complaint(&server, valid_submission()).await;
    let id = stored["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/complaints/{id}"))
        .json(&json!({ "status": "Resolved" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Status updated successfully");
    assert_eq!(body["data"]["status"], "Resolved");

    // Only the status changed.
    assert_eq!(body["data"]["name"], stored["name"]);
    assert_eq!(body["data"]["createdAt"], stored["createdAt"]);
}

#[tokio::test]
async fn test_update_accepts_in_progress_wire_string() {
    let (server, _) = create_test_server();
    let stored = submit_complaint(&server, valid_submission()).await;
    let id = stored["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/complaints/{id}"))
        .json(&json!({ "status": "In Progress" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["status"], "In Progress");
}

#[tokio::test]
async fn test_update_rejects_unknown_status() {
    let (server, _) = create_test_server();
    let stored = submit_complaint(&server, valid_submission()).await;
    let id = stored["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/complaints/{id}"))
        .json(&json!({ "status": "Closed" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Invalid status. Must be: Pending, In Progress, or Resolved"
    );
}

#[tokio::test]
async fn test_update_rejects_non_string_status() {
    let (server, _) = create_test_server();
    let stored = submit_complaint(&server, valid_submission()).await;
    let id = stored["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/complaints/{id}"))
        .json(&json!({ "status": 5 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Invalid status. Must be: Pending, In Progress, or Resolved"
    );
}

#[tokio::test]
async fn test_update_rejects_missing_status() {
    let (server, _) = create_test_server();
    let stored = submit_complaint(&server, valid_submission()).await;
    let id = stored["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/complaints/{id}"))
        .json(&json!({}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_missing_complaint_is_404() {
    let (server, _) = create_test_server();

    let response = server
        .patch("/api/complaints/no-such-id")
        .json(&json!({ "status": "Resolved" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Complaint not found");
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let (server, store) = create_test_server();
    let stored = submit_complaint(&server, valid_submission()).await;
    let id = stored["id"].as_str().unwrap();

    let response = server.delete(&format!("/api/complaints/{id}")).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Complaint deleted successfully");
    assert!(store.is_empty().await);

    let response = server.get(&format!("/api/complaints/{id}")).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_complaint_is_404() {
    let (server, _) = create_test_server();

    let response = server.delete("/api/complaints/no-such-id").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Complaint not found");
}

#[tokio::test]
async fn test_unmatched_route_lists_endpoints() {
    let (server, _) = create_test_server();

    let response = server.get("/api/unknown").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Route not found");
    assert_eq!(body["requestedPath"], "/api/unknown");
    assert_eq!(body["availableEndpoints"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_full_complaint_lifecycle() {
    let (server, _) = create_test_server();

    // Submit.
    let stored = submit_complaint(&server, valid_submission()).await;
    let id = stored["id"].as_str().unwrap();
    assert_eq!(stored["status"], "Pending");

    // Triage.
    let response = server
        .patch(&format!("/api/complaints/{id}"))
        .json(&json!({ "status": "In Progress" }))
        .await;
    response.assert_status_ok();

    // Resolve.
    let response = server
        .patch(&format!("/api/complaints/{id}"))
        .json(&json!({ "status": "Resolved" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["status"], "Resolved");

    // Close out.
    let response = server.delete(&format!("/api/complaints/{id}")).await;
    response.assert_status_ok();

    let response = server.get("/api/complaints").await;
    assert_eq!(response.json::<Value>()["count"], 0);
}
