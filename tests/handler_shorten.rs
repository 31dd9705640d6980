mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_shorten_success() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/api/v1/")
        .json(&json!({ "original-url": "https://dzen.ru/" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body = response.json::<Value>();
    let code = body["original-url"].as_str().unwrap();
    let short_url = body["short-url"].as_str().unwrap();

    assert_eq!(code.len(), 8);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(short_url, format!("{}{}", common::BASE_URL, code));
}

#[tokio::test]
async fn test_shorten_without_trailing_slash() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/api/v1")
        .json(&json!({ "original-url": "http://example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);
}

#[tokio::test]
async fn test_shorten_respects_code_length() {
    let mut settings = common::test_settings();
    settings.code_length = 12;
    let (server, _store) = common::create_test_server_with(settings);

    let (code, _) = common::shorten(&server, "https://example.com").await;

    assert_eq!(code.len(), 12);
}

#[tokio::test]
async fn test_shorten_rejects_non_http_url() {
    let (server, store) = common::create_test_server();

    let response = server
        .post("/api/v1/")
        .json(&json!({ "original-url": "dzen.ru" }))
        .await;

    assert_eq!(response.status_code(), 422);

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");

    assert_eq!(store.link_count(), 0);
}

#[tokio::test]
async fn test_shorten_rejects_url_with_line_break() {
    let (server, store) = common::create_test_server();

    let response = server
        .post("/api/v1/")
        .json(&json!({ "original-url": "https://example.com/a\nb" }))
        .await;

    assert_eq!(response.status_code(), 422);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");

    assert_eq!(store.link_count(), 0);
}

#[tokio::test]
async fn test_shorten_rejects_missing_field() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/api/v1/")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 422);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_issues_distinct_codes() {
    let (server, _store) = common::create_test_server();

    let (first, _) = common::shorten(&server, "https://example.com").await;
    let (second, _) = common::shorten(&server, "https://example.com").await;

    assert_ne!(first, second);
}
