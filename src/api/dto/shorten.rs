//! DTOs for link shortening endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;
use crate::utils::url_validator::validate_original_url;

/// Request to shorten one URL.
///
/// `POST /batch-upload` takes a JSON array of the same shape.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// Must contain `http`.
    #[serde(rename = "original-url")]
    #[validate(custom(function = "validate_original_url"))]
    pub original_url: String,
}

/// A created short link.
///
/// The `original-url` key carries the short code, matching what existing
/// clients of this API parse.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "original-url")]
    pub code: String,

    #[serde(rename = "short-url")]
    pub short_url: String,
}

impl From<Link> for ShortenResponse {
    fn from(link: Link) -> Self {
        Self {
            code: link.short_code,
            short_url: link.short_url,
        }
    }
}
