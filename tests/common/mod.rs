#![allow(dead_code)]

use axum::Router;
use axum::extract::connect_info::MockConnectInfo;
use axum_test::TestServer;
use serde_json::{Value, json};
use short_links::application::services::LinkSettings;
use short_links::infrastructure::persistence::InMemoryStore;
use short_links::routes::app_router;
use short_links::state::AppState;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use url::Url;

/// Address every test request appears to come from.
pub const CLIENT_ADDR: &str = "127.0.0.1:50000";

pub const BASE_URL: &str = "http://127.0.0.1:8080/api/v1/";

pub fn test_settings() -> LinkSettings {
    LinkSettings {
        code_length: 8,
        base_url: Url::parse(BASE_URL).unwrap(),
        max_batch_size: 5,
    }
}

pub fn create_test_state(store: Arc<InMemoryStore>, settings: LinkSettings) -> AppState {
    AppState::new(store.clone(), store, settings)
}

/// Full application over an in-memory store, with a fixed peer address.
pub fn create_test_server() -> (TestServer, Arc<InMemoryStore>) {
    create_test_server_with(test_settings())
}

pub fn create_test_server_with(settings: LinkSettings) -> (TestServer, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let state = create_test_state(store.clone(), settings);

    let addr: SocketAddr = CLIENT_ADDR.parse().unwrap();
    let app = Router::new()
        .fallback_service(app_router(state))
        .layer(MockConnectInfo(addr));

    (TestServer::new(app).unwrap(), store)
}

/// Shortens `url` through the API and returns `(code, short_url)`.
pub async fn shorten(server: &TestServer, url: &str) -> (String, String) {
    let response = server
        .post("/api/v1/")
        .json(&json!({ "original-url": url }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body = response.json::<Value>();
    (
        body["original-url"].as_str().unwrap().to_string(),
        body["short-url"].as_str().unwrap().to_string(),
    )
}

pub async fn insert_link(pool: &PgPool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO short_link (original_url, short_code, short_url) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .bind(format!("{BASE_URL}{code}"))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_history(pool: &PgPool, link_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM short_link_history WHERE short_link_id = $1")
        .bind(link_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
