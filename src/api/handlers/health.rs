//! Handler for store availability check.

use axum::{Json, extract::State};

use crate::api::dto::health::PingResponse;
use crate::state::AppState;

/// Reports whether the backing store answers.
///
/// # Endpoint
///
/// `GET /api/v1/ping`
///
/// Always 200; an unreachable store yields `{"is_available": false}`.
pub async fn ping_handler(State(state): State<AppState>) -> Json<PingResponse> {
    let is_available = state.link_service.is_store_available().await;

    if !is_available {
        tracing::warn!("Store is not available");
    }

    Json(PingResponse { is_available })
}
