//! Handler for link usage status.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use validator::Validate;

use crate::api::dto::status::{StatusQuery, StatusResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Reports how often a link was followed.
///
/// # Endpoint
///
/// `GET /api/v1/{code}/status`
///
/// # Query Parameters
///
/// - `full-info` (optional): include visit details (default: false)
/// - `max-result` (optional): details per page (default: 10, max: 1000)
/// - `offset` (optional): details to skip (default: 0)
///
/// # Response
///
/// ```json
/// { "click_count": 2, "detail": [{ "use_at": "2024-01-01T00:00:00Z", "client_ip": "127.0.0.1:50000" }] }
/// ```
///
/// Deleted links still report their usage.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code.
/// Returns 422 Unprocessable Entity for malformed or out-of-range parameters.
pub async fn status_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    query: Result<Query<StatusQuery>, QueryRejection>,
) -> Result<Json<StatusResponse>, AppError> {
    let Query(query) = query?;
    query.validate()?;

    let link = state.link_service.get_link(&code).await?;
    let info = state
        .usage_service
        .usage_info(&link, query.history_page())
        .await?;

    Ok(Json(info.into()))
}
