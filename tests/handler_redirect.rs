mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_redirect_success() {
    let server = common::create_test_server(common::MemoryStore::new());
    let token = common::register_and_login(&server, "alice").await;

    server
        .post("/url")
        .add_header("Authorization", format!("Bearer {token}"))
        .json(&json!({ "url": "https://example.com/target", "alias": "go" }))
        .await
        .assert_status_ok();

    let response = server.get("/go").await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::create_test_server(common::MemoryStore::new());

    let response = server.get("/nonexistent").await;

    response.assert_status_not_found();

    let body: Value = response.json();
    assert_eq!(body["code"], "url_not_found");
    assert_eq!(body["error"], "url not found");
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let server = common::create_test_server(common::MemoryStore::new());
    let token = common::register_and_login(&server, "alice").await;

    server
        .post("/url")
        .add_header("Authorization", format!("Bearer {token}"))
        .json(&json!({ "url": "https://example.com", "alias": "Docs" }))
        .await
        .assert_status_ok();

    server.get("/docs").await.assert_status_not_found();
    assert_eq!(server.get("/Docs").await.status_code(), 302);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let server = common::create_test_server(common::MemoryStore::new());

    let generated = server.get("/nonexistent").await;
    assert!(!generated.header("x-request-id").is_empty());

    let propagated = server
        .get("/nonexistent")
        .add_header("x-request-id", "req-42")
        .await;
    assert_eq!(propagated.header("x-request-id"), "req-42");
}
