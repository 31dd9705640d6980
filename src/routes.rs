//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/v1/*` - REST API (see [`crate::api::routes::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Mount point of the current API version.
pub const API_PREFIX: &str = "/api/v1";

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/api/v1/` reaches the
/// create endpoint and `/api/v1/{code}/` the redirect.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .nest(API_PREFIX, api::routes::routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
