//! API route tables.
//!
//! Routes are returned without state so that tests can mount them on their
//! own state; [`crate::routes`] adds state and middleware for the servers.

use crate::api::handlers::{
    get_key_handler, health_handler, ping_handler, redirect_handler, set_key_handler,
    shorten_handler,
};
use crate::state::{ShortenerState, StorageState};
use axum::{
    Router,
    routing::{get, post},
};

/// Storage facade routes.
///
/// # Endpoints
///
/// - `GET  /ping`          - Engine reachability
/// - `POST /set-key`       - Upsert a record
/// - `GET  /get-key/{key}` - Read a record
pub fn storage_routes() -> Router<StorageState> {
    Router::new()
        .route("/ping", get(ping_handler))
        .route("/set-key", post(set_key_handler))
        .route("/get-key/{key}", get(get_key_handler))
}

/// Shortener routes.
///
/// # Endpoints
///
/// - `GET /short?url=...` - Create a short link
/// - `GET /r/{key}`       - Redirect to the stored URL
/// - `GET /r`             - Always 404 (no key)
/// - `GET /health`        - Storage facade reachability
pub fn shortener_routes() -> Router<ShortenerState> {
    Router::new()
        .route("/short", get(shorten_handler))
        .route("/r", get(redirect_handler))
        .route("/r/{*key}", get(redirect_handler))
        .route("/health", get(health_handler))
}
