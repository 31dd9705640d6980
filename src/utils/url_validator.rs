//! Validation of URLs submitted for shortening.
//!
//! The service accepts anything that carries an `http` marker
//! (`http://…`, `https://…`) and can be sent back as a `Location` header.
//! Everything else is rejected before a code is generated, so nothing is
//! persisted for invalid input.

use std::borrow::Cow;

use axum::http::HeaderValue;
use serde_json::json;
use validator::ValidationError;

use crate::error::AppError;

/// Marker every accepted URL must contain.
pub const HTTP_MARKER: &str = "http";

const INVALID_URL_MESSAGE: &str = "the value must be an http link";

const UNSENDABLE_URL_MESSAGE: &str = "the value contains characters not allowed in a redirect";

/// `validator` hook for request DTOs.
///
/// # Examples
///
/// ```ignore
/// #[derive(Validate)]
/// struct Request {
///     #[validate(custom(function = "validate_original_url"))]
///     original_url: String,
/// }
/// ```
pub fn validate_original_url(url: &str) -> Result<(), ValidationError> {
    if !url.contains(HTTP_MARKER) {
        return Err(
            ValidationError::new("http_url").with_message(Cow::Borrowed(INVALID_URL_MESSAGE))
        );
    }

    // Control characters would make the redirect unsendable.
    if HeaderValue::from_str(url).is_err() {
        return Err(ValidationError::new("header_safe_url")
            .with_message(Cow::Borrowed(UNSENDABLE_URL_MESSAGE)));
    }

    Ok(())
}

/// Same check as [`validate_original_url`], reported as [`AppError::Validation`].
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the URL lacks the `http` marker or
/// cannot be used as a header value.
pub fn ensure_http_url(url: &str) -> Result<(), AppError> {
    validate_original_url(url).map_err(|e| {
        let message = e
            .message
            .clone()
            .unwrap_or(Cow::Borrowed(INVALID_URL_MESSAGE));
        AppError::bad_request(message, json!({ "original_url": url }))
    })
}
