//! Host extraction for building short links.

use crate::AppError;
use axum::http::{HeaderMap, header};

/// Returns the `Host` header value used as the prefix of short links.
///
/// Unlike a bare domain, the port is kept: the short link must point back at
/// the listener that served the request (e.g. `localhost:8081/r/123`).
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The `Host` header is missing or empty
/// - The header value contains invalid UTF-8
pub fn link_host_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", serde_json::json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?
        .trim();

    if host.is_empty() {
        return Err(AppError::bad_request(
            "Missing Host header",
            serde_json::json!({}),
        ));
    }

    Ok(host.to_string())
}
