//! Handler for link deletion.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::delete::DeleteResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Soft-deletes a short link.
///
/// # Endpoint
///
/// `DELETE /api/v1/{code}`
///
/// # Response
///
/// ```json
/// { "Ab12Cd34": "deleted" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code and 410 Gone if the link was
/// already deleted.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    let link = state.link_service.delete_link(&code).await?;

    Ok(Json(DeleteResponse::new(link.short_code)))
}
