mod common;

use serde_json::Value;
use short_links::domain::entities::NewLink;
use short_links::domain::repositories::LinkRepository;

#[tokio::test]
async fn test_redirect_success() {
    let (server, _store) = common::create_test_server();
    let (code, _) = common::shorten(&server, "https://example.com/target").await;

    let response = server.get(&format!("/api/v1/{code}")).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_counts_every_visit() {
    let (server, _store) = common::create_test_server();
    let (code, _) = common::shorten(&server, "https://example.com").await;

    for _ in 0..3 {
        let response = server.get(&format!("/api/v1/{code}")).await;
        assert_eq!(response.status_code(), 307);
    }

    let status = server
        .get(&format!("/api/v1/{code}/status"))
        .add_query_param("full-info", "true")
        .await;
    let body = status.json::<Value>();

    assert_eq!(body["click_count"], 3);
    assert_eq!(body["detail"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_redirect_trailing_slash() {
    let (server, _store) = common::create_test_server();
    let (code, _) = common::shorten(&server, "https://example.com").await;

    let response = server.get(&format!("/api/v1/{code}/")).await;

    assert_eq!(response.status_code(), 307);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/api/v1/nonexist").await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_deleted_link_is_gone() {
    let (server, _store) = common::create_test_server();
    let (code, _) = common::shorten(&server, "https://example.com").await;

    server.delete(&format!("/api/v1/{code}")).await;

    let response = server.get(&format!("/api/v1/{code}")).await;

    assert_eq!(response.status_code(), 410);
    assert_eq!(response.json::<Value>()["error"]["code"], "gone");
}

#[tokio::test]
async fn test_redirect_to_deleted_link_is_not_counted() {
    let (server, _store) = common::create_test_server();
    let (code, _) = common::shorten(&server, "https://example.com").await;

    server.get(&format!("/api/v1/{code}")).await;
    server.delete(&format!("/api/v1/{code}")).await;
    server.get(&format!("/api/v1/{code}")).await;

    let body = server
        .get(&format!("/api/v1/{code}/status"))
        .await
        .json::<Value>();

    assert_eq!(body["click_count"], 1);
}

#[tokio::test]
async fn test_redirect_to_unsendable_url_is_not_counted() {
    let (server, store) = common::create_test_server();
    store
        .create(NewLink {
            original_url: "https://example.com/a\nb".to_string(),
            short_code: "badloc01".to_string(),
            short_url: format!("{}badloc01", common::BASE_URL),
        })
        .await
        .unwrap();

    let response = server.get("/api/v1/badloc01").await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(response.json::<Value>()["error"]["code"], "internal_error");

    let body = server
        .get("/api/v1/badloc01/status")
        .add_query_param("full-info", "true")
        .await
        .json::<Value>();

    assert_eq!(body["click_count"], 0);
    assert_eq!(body["detail"].as_array().unwrap().len(), 0);
}
