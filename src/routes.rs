//! Top-level routers combining API routes, state and middleware.
//!
//! # Middleware
//!
//! - **Metrics** - Latency histogram and error counters per route
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{metrics, tracing};
use crate::state::{ShortenerState, StorageState};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the storage facade router.
pub fn storage_router(state: StorageState) -> NormalizePath<Router> {
    let router = api::routes::storage_routes()
        .route_layer(middleware::from_fn(metrics::track))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Constructs the shortening/redirect router.
pub fn shortener_router(state: ShortenerState) -> NormalizePath<Router> {
    let router = api::routes::shortener_routes()
        .route_layer(middleware::from_fn(metrics::track))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
