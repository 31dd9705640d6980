//! Handlers for link shortening endpoints.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for one URL.
///
/// # Endpoint
///
/// `POST /api/v1/`
///
/// # Request Body
///
/// ```json
/// { "original-url": "https://dzen.ru/" }
/// ```
///
/// # Response
///
/// **201 Created**
///
/// ```json
/// { "original-url": "Ab12Cd34", "short-url": "http://127.0.0.1:8080/api/v1/Ab12Cd34" }
/// ```
///
/// # Errors
///
/// Returns 422 Unprocessable Entity if the body is malformed or the URL
/// lacks `http`.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state
        .link_service
        .create_short_link(payload.original_url)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Creates short links for a list of URLs in one all-or-nothing operation.
///
/// # Endpoint
///
/// `POST /api/v1/batch-upload`
///
/// # Request Body
///
/// ```json
/// [{ "original-url": "https://a.example" }, { "original-url": "https://b.example" }]
/// ```
///
/// # Response
///
/// **201 Created**, one item per input, in input order.
///
/// # Errors
///
/// Returns 422 Unprocessable Entity if any URL is invalid (the first bad
/// index is reported) or the batch is larger than `MAX_BATCH_SIZE`.
/// Nothing is created in that case.
pub async fn batch_upload_handler(
    State(state): State<AppState>,
    payload: Result<Json<Vec<ShortenRequest>>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<ShortenResponse>>), AppError> {
    let Json(payload) = payload?;

    let urls = payload.into_iter().map(|item| item.original_url).collect();
    let links = state.link_service.create_short_links(urls).await?;

    Ok((
        StatusCode::CREATED,
        Json(links.into_iter().map(ShortenResponse::from).collect()),
    ))
}
