//! API Integration Tests
//!
//! Most tests run the full HTTP stack against the in-process store and need
//! no external services. Tests against PostgreSQL require `DATABASE_URL` and
//! are skipped without it.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use inquiry_core::InquiryId;
use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, test_config, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn create(server: &TestServer, request: &CreateInquiryRequest) -> InquiryResponse {
    let response = server.post("/inquiries", request).await.unwrap();
    let body: Envelope<InquiryResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();
    body.data.unwrap()
}

async fn list(server: &TestServer, path: &str) -> InquiryPage {
    let response = server.get(path).await.unwrap();
    let body: Envelope<InquiryPage> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);
    assert_eq!(body.message, "Inquiries retrieved successfully");
    body.data.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "API is running");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn test_health_ready_reports_unavailable_store() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.memory_repo().set_unavailable(true);

    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
    assert_eq!(body["status"], "not_ready");
    assert_eq!(body["checks"]["database"], "unhealthy");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .client
        .get(format!("{}/health", server.base_url()))
        .header("x-request-id", "trace-me")
        .send()
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "trace-me");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/inquiries").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_rate_limit_spares_health_checks() {
    let mut config = test_config(false).unwrap();
    config.rate_limit.enabled = true;
    config.rate_limit.requests_per_second = 1;
    config.rate_limit.burst = 1;
    let server = TestServer::start_with_config(config).await.unwrap();

    assert_status(server.get("/inquiries").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_status(server.get("/inquiries").await.unwrap(), StatusCode::TOO_MANY_REQUESTS)
        .await
        .unwrap();

    for _ in 0..5 {
        assert_status(server.get("/health").await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    }
}

// ============================================================================
// Create Tests
// ============================================================================

#[tokio::test]
async fn test_create_inquiry() {
    let server = TestServer::start().await.unwrap();
    let request = CreateInquiryRequest::unique().with_phone("+1 555 0100");

    let response = server.post("/inquiries", &request).await.unwrap();
    let body: Envelope<InquiryResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(body.success);
    assert_eq!(body.message, "Inquiry submitted successfully");
    let inquiry = body.data.unwrap();
    assert_eq!(inquiry.name, request.name);
    assert_eq!(inquiry.email, request.email);
    assert_eq!(inquiry.phone.as_deref(), Some("+1 555 0100"));
    assert_eq!(inquiry.category, "Trading");
    assert_eq!(inquiry.status, "pending");
    assert_eq!(inquiry.priority, "medium");
    assert!(inquiry.resolved_at.is_none());
    assert!(inquiry.resolution_notes.is_none());
    assert!(chrono::DateTime::parse_from_rfc3339(&inquiry.created_at).is_ok());
}

#[tokio::test]
async fn test_create_ignores_client_status_and_trims_input() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post(
            "/inquiries",
            &json!({
                "name": "  Padded Name  ",
                "email": "padded@example.com",
                "phone": "   ",
                "category": "Market Data",
                "subject": "Feed delay",
                "message": "Quotes arrive several seconds late.",
                "priority": "urgent",
                "status": "closed"
            }),
        )
        .await
        .unwrap();
    let body: Envelope<InquiryResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();
    let inquiry = body.data.unwrap();

    assert_eq!(inquiry.name, "Padded Name");
    assert!(inquiry.phone.is_none());
    assert_eq!(inquiry.priority, "urgent");
    assert_eq!(inquiry.status, "pending");
}

#[tokio::test]
async fn test_create_validation_errors() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post(
            "/inquiries",
            &json!({
                "email": "not-an-email",
                "category": "Billing",
                "subject": "Hi",
                "message": "short"
            }),
        )
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    assert!(!body.success);
    assert_eq!(body.message, "Validation failed");
    assert_eq!(body.errors["name"], vec!["Please provide your name."]);
    assert_eq!(body.errors["email"], vec!["Please provide a valid email address."]);
    assert!(body.errors["category"][0].starts_with("The selected category is invalid."));
    assert_eq!(
        body.errors["message"],
        vec!["The message must be at least 10 characters long."]
    );
    assert!(!body.errors.contains_key("subject"));
    assert_eq!(server.memory_repo().stored_len(), 0);
}

#[tokio::test]
async fn test_create_wrong_types_reported_with_other_errors() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post(
            "/inquiries",
            &json!({
                "name": 123,
                "email": "not-an-email",
                "category": "Trading",
                "subject": ["Hi"],
                "message": "short"
            }),
        )
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    assert_eq!(body.message, "Validation failed");
    assert_eq!(body.errors["name"], vec!["The name must be a string."]);
    assert_eq!(body.errors["subject"], vec!["The subject must be a string."]);
    assert_eq!(body.errors["email"], vec!["Please provide a valid email address."]);
    assert_eq!(
        body.errors["message"],
        vec!["The message must be at least 10 characters long."]
    );
    assert!(!body.errors.contains_key("category"));
    assert_eq!(server.memory_repo().stored_len(), 0);
}

#[tokio::test]
async fn test_create_malformed_json() {
    let server = TestServer::start().await.unwrap();
    let response = server.post_raw("/inquiries", "{\"name\": ").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(!body.success);
}

// ============================================================================
// Read Tests
// ============================================================================

#[tokio::test]
async fn test_get_inquiry() {
    let server = TestServer::start().await.unwrap();
    let created = create(&server, &CreateInquiryRequest::unique()).await;

    let response = server.get(&format!("/inquiries/{}", created.id)).await.unwrap();
    let body: Envelope<InquiryResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.message, "Inquiry retrieved successfully");
    let inquiry = body.data.unwrap();
    assert_eq!(inquiry.id, created.id);
    assert_eq!(inquiry.subject, created.subject);
}

#[tokio::test]
async fn test_get_inquiry_not_found() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/inquiries/999").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert!(!body.success);
    assert_eq!(body.message, "Inquiry not found");
    assert_eq!(body.error.as_deref(), Some("No inquiry found with ID: 999"));

    let response = server.get("/inquiries/abc").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// List Tests
// ============================================================================

#[tokio::test]
async fn test_list_shape_and_pagination() {
    let server = TestServer::start().await.unwrap();
    for _ in 0..3 {
        create(&server, &CreateInquiryRequest::unique()).await;
    }

    let page = list(&server, "/inquiries?per_page=2").await;
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.meta.current_page, 1);
    assert_eq!(page.meta.per_page, 2);
    assert_eq!(page.meta.total, 3);
    assert_eq!(page.meta.last_page, 2);
    assert_eq!(page.meta.from, Some(1));
    assert_eq!(page.meta.to, Some(2));
    assert_eq!(page.meta.path, "/inquiries");
    assert_eq!(page.links.first, "/inquiries?page=1&per_page=2");
    assert_eq!(page.links.last, "/inquiries?page=2&per_page=2");
    assert!(page.links.prev.is_none());
    assert_eq!(page.links.next.as_deref(), Some("/inquiries?page=2&per_page=2"));

    // Newest first by default
    assert!(page.data[0].id > page.data[1].id);

    let second = list(&server, "/inquiries?per_page=2&page=2").await;
    assert_eq!(second.data.len(), 1);
    assert_eq!(second.meta.from, Some(3));
    assert!(second.links.next.is_none());
}

#[tokio::test]
async fn test_list_empty() {
    let server = TestServer::start().await.unwrap();
    let page = list(&server, "/inquiries").await;

    assert!(page.data.is_empty());
    assert_eq!(page.meta.total, 0);
    assert_eq!(page.meta.per_page, 15);
    assert_eq!(page.meta.last_page, 1);
    assert!(page.meta.from.is_none());
    assert!(page.meta.to.is_none());
}

#[tokio::test]
async fn test_list_per_page_is_clamped() {
    let server = TestServer::start().await.unwrap();
    create(&server, &CreateInquiryRequest::unique()).await;

    let page = list(&server, "/inquiries?per_page=500").await;
    assert_eq!(page.meta.per_page, 100);

    let page = list(&server, "/inquiries?per_page=0").await;
    assert_eq!(page.meta.per_page, 1);
}

#[tokio::test]
async fn test_list_filters() {
    let server = TestServer::start().await.unwrap();
    create(&server, &CreateInquiryRequest::unique()).await;
    create(
        &server,
        &CreateInquiryRequest::unique()
            .with_category("Technical Issues")
            .with_priority("high"),
    )
    .await;
    let mut special = CreateInquiryRequest::unique().with_category("Technical Issues");
    special.message = "The WebSocket feed disconnects every hour.".to_string();
    create(&server, &special).await;

    let page = list(&server, "/inquiries?category=Technical%20Issues").await;
    assert_eq!(page.meta.total, 2);

    let page = list(&server, "/inquiries?category=Technical%20Issues&priority=high").await;
    assert_eq!(page.meta.total, 1);
    assert_eq!(page.data[0].priority, "high");

    // Case-insensitive substring over name, email, subject, and message
    let page = list(&server, "/inquiries?search=websocket").await;
    assert_eq!(page.meta.total, 1);
    assert_eq!(page.data[0].email, special.email);

    let page = list(&server, "/inquiries?status=pending").await;
    assert_eq!(page.meta.total, 3);

    // Unknown filter values match nothing
    let page = list(&server, "/inquiries?category=Billing").await;
    assert_eq!(page.meta.total, 0);
}

#[tokio::test]
async fn test_list_repeated_key_uses_last_value() {
    let server = TestServer::start().await.unwrap();
    let first = create(&server, &CreateInquiryRequest::unique()).await;
    create(&server, &CreateInquiryRequest::unique()).await;

    let response = server
        .put(&format!("/inquiries/{}", first.id), &json!({"status": "closed"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let page = list(&server, "/inquiries?status=pending&status=closed").await;
    assert_eq!(page.meta.total, 1);
    assert_eq!(page.data[0].id, first.id);
    assert_eq!(page.data[0].status, "closed");
}

#[tokio::test]
async fn test_list_sorting() {
    let server = TestServer::start().await.unwrap();
    let mut zed = CreateInquiryRequest::unique();
    zed.name = "Zed".to_string();
    let mut amy = CreateInquiryRequest::unique();
    amy.name = "Amy".to_string();
    create(&server, &zed).await;
    create(&server, &amy).await;

    let page = list(&server, "/inquiries?sort_by=name&sort_order=asc").await;
    assert_eq!(page.data[0].name, "Amy");

    // Unknown sort column falls back to created_at desc
    let page = list(&server, "/inquiries?sort_by=password").await;
    assert_eq!(page.data[0].name, "Amy");
}

// ============================================================================
// Update Tests
// ============================================================================

#[tokio::test]
async fn test_update_inquiry_stamps_resolved_at() {
    let server = TestServer::start().await.unwrap();
    let created = create(&server, &CreateInquiryRequest::unique()).await;
    let path = format!("/inquiries/{}", created.id);

    let response = server
        .put(&path, &json!({"status": "in_progress", "priority": "high"}))
        .await
        .unwrap();
    let body: Envelope<InquiryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Inquiry updated successfully");
    let inquiry = body.data.unwrap();
    assert_eq!(inquiry.status, "in_progress");
    assert_eq!(inquiry.priority, "high");
    assert!(inquiry.resolved_at.is_none());

    let response = server
        .patch(
            &path,
            &json!({"status": "resolved", "resolution_notes": "Order re-submitted."}),
        )
        .await
        .unwrap();
    let body: Envelope<InquiryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let resolved = body.data.unwrap();
    assert_eq!(resolved.status, "resolved");
    assert_eq!(resolved.resolution_notes.as_deref(), Some("Order re-submitted."));
    let resolved_at = resolved.resolved_at.clone().unwrap();

    // Moving on to closed keeps the resolution time
    let response = server.patch(&path, &json!({"status": "closed"})).await.unwrap();
    let body: Envelope<InquiryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let closed = body.data.unwrap();
    assert_eq!(closed.status, "closed");
    assert_eq!(closed.resolved_at, Some(resolved_at));
    assert_eq!(closed.name, created.name);
}

#[tokio::test]
async fn test_update_clears_nullable_fields() {
    let server = TestServer::start().await.unwrap();
    let created = create(&server, &CreateInquiryRequest::unique().with_phone("555-0101")).await;

    let response = server
        .patch(&format!("/inquiries/{}", created.id), &json!({"phone": null}))
        .await
        .unwrap();
    let body: Envelope<InquiryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.data.unwrap().phone.is_none());
}

#[tokio::test]
async fn test_update_validation_errors() {
    let server = TestServer::start().await.unwrap();
    let created = create(&server, &CreateInquiryRequest::unique()).await;

    let response = server
        .put(
            &format!("/inquiries/{}", created.id),
            &json!({"status": "archived", "email": "nope"}),
        )
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert!(body.errors["status"][0].starts_with("The selected status is invalid."));
    assert!(body.errors.contains_key("email"));
}

#[tokio::test]
async fn test_update_rejects_null_on_required_fields() {
    let server = TestServer::start().await.unwrap();
    let created = create(&server, &CreateInquiryRequest::unique()).await;

    let response = server
        .patch(
            &format!("/inquiries/{}", created.id),
            &json!({"status": null, "name": null, "priority": 3}),
        )
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(body.errors["status"], vec!["The status must be a string."]);
    assert_eq!(body.errors["name"], vec!["The name must be a string."]);
    assert_eq!(body.errors["priority"], vec!["The priority must be a string."]);

    let response = server
        .get(&format!("/inquiries/{}", created.id))
        .await
        .unwrap();
    let body: Envelope<InquiryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let unchanged = body.data.unwrap();
    assert_eq!(unchanged.status, "pending");
    assert_eq!(unchanged.name, created.name);
}

#[tokio::test]
async fn test_update_not_found() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .put("/inquiries/999", &json!({"status": "resolved"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Delete Tests
// ============================================================================

#[tokio::test]
async fn test_delete_inquiry_is_soft() {
    let server = TestServer::start().await.unwrap();
    let created = create(&server, &CreateInquiryRequest::unique()).await;
    let path = format!("/inquiries/{}", created.id);

    let response = server.delete(&path).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);
    assert_eq!(body.message, "Inquiry deleted successfully");
    assert!(body.data.is_none());

    // Hidden from every read path
    assert_status(server.get(&path).await.unwrap(), StatusCode::NOT_FOUND)
        .await
        .unwrap();
    assert_status(server.delete(&path).await.unwrap(), StatusCode::NOT_FOUND)
        .await
        .unwrap();
    assert_eq!(list(&server, "/inquiries").await.meta.total, 0);

    // Still stored, with its deletion time
    let stored = server
        .memory_repo()
        .find_including_deleted(InquiryId::new(created.id))
        .unwrap();
    assert!(stored.deleted_at.is_some());
}

// ============================================================================
// Statistics Tests
// ============================================================================

#[tokio::test]
async fn test_statistics() {
    let server = TestServer::start().await.unwrap();
    let first = create(&server, &CreateInquiryRequest::unique().with_priority("urgent")).await;
    create(&server, &CreateInquiryRequest::unique().with_category("General Questions")).await;
    let gone = create(&server, &CreateInquiryRequest::unique()).await;

    server
        .patch(&format!("/inquiries/{}", first.id), &json!({"status": "resolved"}))
        .await
        .unwrap();
    server.delete(&format!("/inquiries/{}", gone.id)).await.unwrap();

    // Static segment, not taken as an id
    let response = server.get("/inquiries/statistics").await.unwrap();
    let body: Envelope<Statistics> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Statistics retrieved successfully");
    let stats = body.data.unwrap();

    assert_eq!(stats.total, 2);
    assert_eq!(stats.by_status.values().sum::<i64>(), stats.total);
    assert_eq!(stats.by_category.values().sum::<i64>(), stats.total);
    assert_eq!(stats.by_priority.values().sum::<i64>(), stats.total);
    assert_eq!(stats.by_status["resolved"], 1);
    assert_eq!(stats.by_status["in_progress"], 0);
    assert_eq!(stats.by_category["Trading"], 1);
    assert_eq!(stats.by_category["Market Data"], 0);
    assert_eq!(stats.by_category["General Questions"], 1);
    assert_eq!(stats.by_priority["urgent"], 1);
}

// ============================================================================
// Server Error Tests
// ============================================================================

#[tokio::test]
async fn test_store_failure_hides_detail() {
    let server = TestServer::start().await.unwrap();
    server.memory_repo().set_unavailable(true);

    let response = server.get("/inquiries").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert!(!body.success);
    assert_eq!(body.message, "Failed to retrieve inquiries");
    assert_eq!(
        body.error.as_deref(),
        Some("An error occurred while processing your request")
    );
}

#[tokio::test]
async fn test_store_failure_detail_in_debug_mode() {
    let server = TestServer::start_in_memory(true).await.unwrap();
    server.memory_repo().set_unavailable(true);

    let response = server.get("/inquiries/statistics").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body.message, "Failed to retrieve statistics");
    assert!(body.error.unwrap().contains("inquiry store is unavailable"));
}

// ============================================================================
// PostgreSQL Tests
// ============================================================================

#[tokio::test]
async fn test_postgres_round_trip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start_postgres().await.expect("Failed to start server");
    let created = create(&server, &CreateInquiryRequest::unique()).await;
    let path = format!("/inquiries/{}", created.id);

    let response = server.patch(&path, &json!({"status": "resolved"})).await.unwrap();
    let body: Envelope<InquiryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.data.unwrap().resolved_at.is_some());

    let page = list(&server, &format!("/inquiries?search={}", created.email)).await;
    assert_eq!(page.meta.total, 1);

    assert_status(server.delete(&path).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_status(server.get(&path).await.unwrap(), StatusCode::NOT_FOUND)
        .await
        .unwrap();
}
