//! Handler for link shortening endpoint.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
};

use crate::api::dto::shorten::ShortenQuery;
use crate::error::AppError;
use crate::state::ShortenerState;
use crate::utils::link_host::link_host_from_headers;

/// Creates a short link for a URL.
///
/// # Endpoint
///
/// `GET /short?url=<absolute-url>`
///
/// # Response
///
/// Plain text short link, prefixed with the configured link host or, when
/// none is configured, the request's `Host` header:
///
/// ```text
/// localhost:8081/r/1203504933
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing or not an absolute URL.
/// Returns 500 Internal Server Error if the storage facade cannot store it.
pub async fn shorten_handler(
    State(state): State<ShortenerState>,
    headers: HeaderMap,
    Query(query): Query<ShortenQuery>,
) -> Result<String, AppError> {
    let link_host = match &state.link_host {
        Some(host) => host.clone(),
        None => link_host_from_headers(&headers)?,
    };

    state
        .shorten_service
        .shorten(query.url.as_deref().unwrap_or_default(), &link_host)
        .await
}
