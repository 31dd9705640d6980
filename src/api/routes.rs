//! API route configuration.

use crate::api::handlers::{
    batch_upload_handler, delete_link_handler, ping_handler, redirect_handler, shorten_handler,
    status_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Version 1 of the public API, mounted under `/api/v1`.
///
/// # Endpoints
///
/// - `POST   /`              - Shorten one URL
/// - `POST   /batch-upload`  - Shorten a list of URLs
/// - `GET    /ping`          - Store availability
/// - `GET    /{code}`        - Redirect to the original URL
/// - `DELETE /{code}`        - Soft-delete a link
/// - `GET    /{code}/status` - Usage count and visit history
///
/// `/ping` is a static segment and wins over `/{code}`; the code generator
/// never issues `ping`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(shorten_handler))
        .route("/batch-upload", post(batch_upload_handler))
        .route("/ping", get(ping_handler))
        .route("/{code}", get(redirect_handler).delete(delete_link_handler))
        .route("/{code}/status", get(status_handler))
}
