//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/v1/{code}`
///
/// # Request Flow
///
/// 1. Look up the link; unknown → 404, deleted → 410
/// 2. Build the `Location` header; an unsendable URL → 500, nothing recorded
/// 3. Append a history entry with the client's `ip:port`
/// 4. Increment the link's usage counter
/// 5. Return 307 Temporary Redirect to the original URL
///
/// The visit is recorded before responding, so a status request issued
/// after the redirect already counts it.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve_active(&code).await?;

    let location = HeaderValue::from_str(&link.original_url).map_err(|e| {
        AppError::internal(
            "Stored URL cannot be used as a redirect target",
            json!({ "code": code, "reason": e.to_string() }),
        )
    })?;

    state
        .usage_service
        .record_visit(&link, addr.to_string())
        .await?;

    Ok((
        StatusCode::TEMPORARY_REDIRECT,
        [(header::LOCATION, location)],
    ))
}
