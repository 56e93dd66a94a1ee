//! HTTP server initialization and runtime setup.
//!
//! Builds each service's dependencies from its configuration and runs the
//! Axum server until a shutdown signal arrives.

use crate::config::{ShortenerConfig, StorageConfig};
use crate::domain::repositories::StorageClient;
use crate::infrastructure::engine::{KvEngine, MemoryEngine, RedisEngine};
use crate::infrastructure::storage_client::HttpStorageClient;
use crate::routes::{shortener_router, storage_router};
use crate::state::{ShortenerState, StorageState};

use anyhow::{Context, Result};
use axum::Router;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::normalize_path::NormalizePath;

/// Runs the storage facade with the given configuration.
///
/// Initializes:
/// - Redis engine, or the in-memory engine when Redis is not configured
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Redis is configured but unreachable
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run_storage(config: StorageConfig) -> Result<()> {
    let engine: Arc<dyn KvEngine> = if let Some(redis_url) = &config.redis_url {
        let redis = RedisEngine::connect(redis_url)
            .await
            .context("Failed to initialize Redis engine")?;
        tracing::info!("Engine enabled (Redis)");
        Arc::new(redis)
    } else {
        tracing::info!("Engine enabled (memory, not persisted)");
        Arc::new(MemoryEngine::new())
    };

    let app = storage_router(StorageState::new(engine));

    serve(app, &config.listen_addr).await
}

/// Runs the shortening/redirect service with the given configuration.
///
/// The storage facade is not contacted at startup; `/health` reports
/// whether it is reachable.
///
/// # Errors
///
/// Returns an error if:
/// - The storage client cannot be built from the configuration
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run_shortener(config: ShortenerConfig) -> Result<()> {
    let storage: Arc<dyn StorageClient> = Arc::new(
        HttpStorageClient::new(&config.storage_client_config())
            .context("Failed to build storage client")?,
    );

    let app = shortener_router(ShortenerState::new(storage, config.link_host.clone()));

    serve(app, &config.listen_addr).await
}

async fn serve(app: NormalizePath<Router>, listen_addr: &str) -> Result<()> {
    let addr: SocketAddr = listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Completes on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
