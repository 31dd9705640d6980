mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_ping_available() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/api/v1/ping").await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>(), json!({ "is_available": true }));
}

#[tokio::test]
async fn test_ping_unavailable_is_not_an_error() {
    let (server, store) = common::create_test_server();
    store.set_available(false);

    let response = server.get("/api/v1/ping").await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>(), json!({ "is_available": false }));
}
