mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_batch_upload_keeps_input_order() {
    let (server, _store) = common::create_test_server();
    let urls = ["https://a.example/", "https://b.example/", "https://c.example/"];

    let response = server
        .post("/api/v1/batch-upload")
        .json(&json!([
            { "original-url": urls[0] },
            { "original-url": urls[1] },
            { "original-url": urls[2] },
        ]))
        .await;

    assert_eq!(response.status_code(), 201);

    let body = response.json::<Vec<Value>>();
    assert_eq!(body.len(), 3);

    for (item, url) in body.iter().zip(urls) {
        let code = item["original-url"].as_str().unwrap();
        assert_eq!(item["short-url"], format!("{}{}", common::BASE_URL, code));

        let redirect = server.get(&format!("/api/v1/{code}")).await;
        assert_eq!(redirect.status_code(), 307);
        assert_eq!(redirect.header("location"), url);
    }
}

#[tokio::test]
async fn test_batch_upload_is_all_or_nothing() {
    let (server, store) = common::create_test_server();

    let response = server
        .post("/api/v1/batch-upload")
        .json(&json!([
            { "original-url": "https://a.example/" },
            { "original-url": "b.example" },
        ]))
        .await;

    assert_eq!(response.status_code(), 422);

    let body = response.json::<Value>();
    assert_eq!(body["error"]["details"]["index"], 1);
    assert_eq!(store.link_count(), 0);
}

#[tokio::test]
async fn test_batch_upload_rejects_oversized_batch() {
    let (server, store) = common::create_test_server();
    let items: Vec<Value> = (0..6)
        .map(|i| json!({ "original-url": format!("https://example.com/{i}") }))
        .collect();

    let response = server.post("/api/v1/batch-upload").json(&items).await;

    assert_eq!(response.status_code(), 422);
    assert_eq!(store.link_count(), 0);
}

#[tokio::test]
async fn test_batch_upload_empty_list() {
    let (server, _store) = common::create_test_server();

    let response = server.post("/api/v1/batch-upload").json(&json!([])).await;

    assert_eq!(response.status_code(), 201);
    assert_eq!(response.json::<Vec<Value>>().len(), 0);
}

#[tokio::test]
async fn test_batch_upload_requires_array() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/api/v1/batch-upload")
        .json(&json!({ "original-url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 422);
}
