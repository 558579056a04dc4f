//! End-to-end flows across registration, creation, redirect and delete.

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_only_creator_can_delete() {
    let store = common::MemoryStore::new();
    let server = common::create_test_server(store.clone());

    let owner = common::register_and_login(&server, "owner").await;
    let other = common::register_and_login(&server, "other").await;

    server
        .post("/url")
        .add_header("Authorization", format!("Bearer {owner}"))
        .json(&json!({ "url": "https://example.com", "alias": "abc123" }))
        .await
        .assert_status_ok();

    let redirect = server.get("/abc123").await;
    assert_eq!(redirect.status_code(), 302);
    assert_eq!(redirect.header("location"), "https://example.com");

    let response = server
        .delete("/url/abc123")
        .add_header("Authorization", format!("Bearer {other}"))
        .await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["code"], "alias_not_found");

    assert_eq!(server.get("/abc123").await.status_code(), 302);

    server
        .delete("/url/abc123")
        .add_header("Authorization", format!("Bearer {owner}"))
        .await
        .assert_status_ok();

    server.get("/abc123").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_with_wrong_case_is_reported() {
    let store = common::MemoryStore::new();
    let server = common::create_test_server(store.clone());
    let token = common::register_and_login(&server, "alice").await;

    server
        .post("/url")
        .add_header("Authorization", format!("Bearer {token}"))
        .json(&json!({ "url": "https://example.com", "alias": "MyLink" }))
        .await
        .assert_status_ok();

    let response = server
        .delete("/url/mylink")
        .add_header("Authorization", format!("Bearer {token}"))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["code"], "case_mismatch");
    assert_eq!(body["error"], "case sensitivity problem");

    assert!(store.find("MyLink").is_some());
}

#[tokio::test]
async fn test_case_variants_are_distinct_aliases() {
    let store = common::MemoryStore::new();
    let server = common::create_test_server(store.clone());
    let token = common::register_and_login(&server, "alice").await;

    for (alias, target) in [("abc", "https://lower.example.com"), ("ABC", "https://upper.example.com")] {
        server
            .post("/url")
            .add_header("Authorization", format!("Bearer {token}"))
            .json(&json!({ "url": target, "alias": alias }))
            .await
            .assert_status_ok();
    }

    assert_eq!(
        server.get("/abc").await.header("location"),
        "https://lower.example.com"
    );
    assert_eq!(
        server.get("/ABC").await.header("location"),
        "https://upper.example.com"
    );

    server
        .delete("/url/ABC")
        .add_header("Authorization", format!("Bearer {token}"))
        .await
        .assert_status_ok();

    assert!(store.find("abc").is_some());
    assert!(store.find("ABC").is_none());
}

#[tokio::test]
async fn test_generated_aliases_do_not_collide() {
    let store = common::MemoryStore::new();
    let server = common::create_test_server(store.clone());
    let token = common::register_and_login(&server, "alice").await;

    let mut aliases = std::collections::HashSet::new();
    for i in 0..20 {
        let response = server
            .post("/url")
            .add_header("Authorization", format!("Bearer {token}"))
            .json(&json!({ "url": format!("https://example.com/{i}") }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        aliases.insert(body["alias"].as_str().unwrap().to_string());
    }

    assert_eq!(aliases.len(), 20);
    assert_eq!(store.url_count(), 20);
}
