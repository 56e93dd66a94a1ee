//! Handler for short link redirect.

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::warn;

use crate::error::AppError;
use crate::state::ShortenerState;

/// Redirects a short link to its original URL.
///
/// # Endpoint
///
/// `GET /r/{key}`
///
/// # Request Flow
///
/// 1. Take the key from the path segment after `/r`
/// 2. Fetch the record from the storage facade
/// 3. Return 301 Moved Permanently to the stored URL
///
/// # Errors
///
/// Returns 404 Not Found if the path has no key or the key is unknown.
/// Returns 400 Bad Request if the stored URL is empty or cannot be sent as a
/// `Location` header.
/// Returns 500 Internal Server Error if the storage facade is unreachable.
pub async fn redirect_handler(
    State(state): State<ShortenerState>,
    uri: Uri,
) -> Result<Response, AppError> {
    let target = state.redirect_service.resolve(uri.path()).await?;

    let location = HeaderValue::try_from(target.as_str()).map_err(|e| {
        warn!(target = %target.escape_debug(), "Stored target is not a valid header: {}", e);
        AppError::bad_request(
            "Stored target is not a valid URL",
            json!({ "target": target }),
        )
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
