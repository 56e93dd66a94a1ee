//! Request latency and error metrics.
//!
//! Records through the `metrics` facade; whichever recorder the binary
//! installs decides where they go. Without a recorder the calls are no-ops.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};

/// Histogram of request latency in milliseconds.
pub const REQUEST_DURATION_MS: &str = "http_requests_duration_ms";

/// Counter of responses with a 4xx or 5xx status.
pub const REQUEST_ERRORS_TOTAL: &str = "http_requests_errors_total";

/// Records latency and errors tagged by method and handler.
///
/// The handler tag is the matched route template (`/r/{*key}`), not the raw
/// path, so keys do not explode label cardinality. Must be installed with
/// `route_layer` for the matched route to be known.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/short", get(shorten_handler))
///     .route_layer(axum::middleware::from_fn(metrics::track));
/// ```
pub async fn track(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = req.method().to_string();
    let handler = req
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(req).await;

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    metrics::histogram!(
        REQUEST_DURATION_MS,
        "method" => method.clone(),
        "handler" => handler.clone()
    )
    .record(elapsed_ms);

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        metrics::counter!(
            REQUEST_ERRORS_TOTAL,
            "method" => method,
            "handler" => handler,
            "status" => status.as_u16().to_string()
        )
        .increment(1);
    }

    response
}
