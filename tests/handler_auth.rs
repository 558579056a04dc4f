mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_register_success() {
    let server = common::create_test_server(common::MemoryStore::new());

    let response = server
        .post("/register")
        .json(&json!({ "username": "alice", "password": "password123" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["status"], "OK");
    assert_eq!(body["username"], "alice");
    assert!(body["user_id"].as_str().is_some());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let server = common::create_test_server(common::MemoryStore::new());
    common::register(&server, "alice", "password123").await;

    let response = server
        .post("/register")
        .json(&json!({ "username": "alice", "password": "other-password" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let body: Value = response.json();
    assert_eq!(body["status"], "Error");
    assert_eq!(body["code"], "username_taken");
}

#[tokio::test]
async fn test_register_empty_password() {
    let server = common::create_test_server(common::MemoryStore::new());

    let response = server
        .post("/register")
        .json(&json!({ "username": "alice", "password": "" }))
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["code"], "validation_error");
    assert_eq!(body["error"], "field password is not valid");
}

#[tokio::test]
async fn test_register_malformed_json() {
    let server = common::create_test_server(common::MemoryStore::new());

    let response = server
        .post("/register")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["error"], "failed to decode request");
}

#[tokio::test]
async fn test_login_success_returns_token() {
    let server = common::create_test_server(common::MemoryStore::new());
    let user_id = common::register(&server, "alice", "password123").await;

    let token = common::login(&server, "alice", "password123").await;

    let claims = common::test_token_issuer().verify(&token).unwrap();
    assert_eq!(claims.user_id, user_id);
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.exp - claims.iat, 24 * 3600);
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_user_look_the_same() {
    let server = common::create_test_server(common::MemoryStore::new());
    common::register(&server, "alice", "password123").await;

    let wrong_password = server
        .post("/login")
        .json(&json!({ "username": "alice", "password": "nope" }))
        .await;
    let unknown_user = server
        .post("/login")
        .json(&json!({ "username": "bob", "password": "password123" }))
        .await;

    wrong_password.assert_status_unauthorized();
    unknown_user.assert_status_unauthorized();

    let a: Value = wrong_password.json();
    let b: Value = unknown_user.json();
    assert_eq!(a, b);
    assert_eq!(a["code"], "invalid_credentials");
    assert_eq!(a["error"], "invalid username or password");
}
