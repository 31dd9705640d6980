//! DTO for the store availability check.

use serde::Serialize;

/// Response of `GET /ping`.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub is_available: bool,
}
