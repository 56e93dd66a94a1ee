mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::{Json, Router, http::StatusCode, routing::get, routing::post};
use hashlink::domain::repositories::{StorageClient, StorageError};
use hashlink::infrastructure::engine::{KvEngine, MemoryEngine};
use hashlink::infrastructure::storage_client::{HttpStorageClient, HttpStorageClientConfig};
use serde_json::{Value, json};

#[tokio::test]
async fn test_store_then_fetch() {
    let engine = Arc::new(MemoryEngine::new());
    let base_url = common::spawn_storage_facade(engine.clone()).await;
    let client = common::http_storage_client(&base_url);

    client.store("42", "https://example.com").await.unwrap();

    let record = client.fetch("42").await.unwrap();
    assert_eq!(record.key, "42");
    assert_eq!(record.value, "https://example.com");
    assert_eq!(
        engine.get("42").await.unwrap().as_deref(),
        Some("https://example.com")
    );
}

#[tokio::test]
async fn test_fetch_missing_key() {
    let base_url = common::spawn_storage_facade(Arc::new(MemoryEngine::new())).await;
    let client = common::http_storage_client(&base_url);

    let result = client.fetch("missing").await;

    assert!(matches!(result, Err(StorageError::NotFound { key }) if key == "missing"));
}

#[tokio::test]
async fn test_fetch_encodes_key() {
    let engine = Arc::new(MemoryEngine::new());
    engine.set("a b", "https://example.com/space").await.unwrap();
    let base_url = common::spawn_storage_facade(engine).await;
    let client = common::http_storage_client(&base_url);

    let record = client.fetch("a b").await.unwrap();

    assert_eq!(record.value, "https://example.com/space");
}

#[tokio::test]
async fn test_ping() {
    let base_url = common::spawn_storage_facade(Arc::new(MemoryEngine::new())).await;
    let client = common::http_storage_client(&base_url);

    assert_eq!(client.ping().await.unwrap(), "PONG");
}

#[tokio::test]
async fn test_engine_failures() {
    let base_url = common::spawn_storage_facade(Arc::new(common::FailingEngine)).await;
    let client = common::http_storage_client(&base_url);

    let result = client.store("42", "https://example.com").await;
    assert!(matches!(result, Err(StorageError::Persist { status: 422 })));

    let result = client.fetch("42").await;
    assert!(matches!(result, Err(StorageError::Upstream { status: 500 })));

    let result = client.ping().await;
    assert!(matches!(result, Err(StorageError::Upstream { status: 503 })));
}

#[tokio::test]
async fn test_legacy_status_envelopes() {
    let router = Router::new()
        .route(
            "/set-key",
            post(|| async { Json(json!({ "message": "Error: READONLY", "status": 422 })) }),
        )
        .route(
            "/get-key/{key}",
            get(|| async { Json(json!({ "message": "Key not found", "status": 404 })) }),
        );
    let base_url = common::spawn_router(router).await;
    let client = common::http_storage_client(&base_url);

    let result = client.store("42", "https://example.com").await;
    assert!(matches!(result, Err(StorageError::Persist { status: 422 })));

    let result = client.fetch("42").await;
    assert!(matches!(result, Err(StorageError::NotFound { .. })));
}

#[tokio::test]
async fn test_fetch_bare_not_found_is_upstream_error() {
    let router = Router::new().route("/ping", get(|| async { "PONG" }));
    let base_url = common::spawn_router(router).await;
    let client = common::http_storage_client(&base_url);

    let result = client.fetch("42").await;

    assert!(matches!(result, Err(StorageError::Upstream { status: 404 })));
}

#[tokio::test]
async fn test_fetch_with_misconfigured_get_path() {
    let engine = Arc::new(MemoryEngine::new());
    engine.set("42", "https://example.com").await.unwrap();
    let base_url = common::spawn_storage_facade(engine).await;
    let client = HttpStorageClient::new(&HttpStorageClientConfig {
        base_url,
        get_path: "/get/".to_string(),
        ..Default::default()
    })
    .unwrap();

    let result = client.fetch("42").await;

    assert!(matches!(result, Err(StorageError::Upstream { status: 404 })));
}

#[tokio::test]
async fn test_fetch_not_found_envelope_with_http_404() {
    let router = Router::new().route(
        "/get-key/{key}",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Key not found", "status": 404 })),
            )
        }),
    );
    let base_url = common::spawn_router(router).await;
    let client = common::http_storage_client(&base_url);

    let result = client.fetch("42").await;

    assert!(matches!(result, Err(StorageError::NotFound { key }) if key == "42"));
}

#[tokio::test]
async fn test_set_key_acknowledged_without_envelope() {
    let router = Router::new().route("/set-key", post(|| async { StatusCode::OK }));
    let base_url = common::spawn_router(router).await;
    let client = common::http_storage_client(&base_url);

    client.store("42", "https://example.com").await.unwrap();
}

#[tokio::test]
async fn test_fetch_malformed_record() {
    let router = Router::new().route(
        "/get-key/{key}",
        get(|| async { Json(json!({ "key": "42" })) }),
    );
    let base_url = common::spawn_router(router).await;
    let client = common::http_storage_client(&base_url);

    let result = client.fetch("42").await;

    assert!(matches!(result, Err(StorageError::Decode(_))));
}

#[tokio::test]
async fn test_fetch_non_json_body() {
    let router = Router::new().route("/get-key/{key}", get(|| async { "<html>oops</html>" }));
    let base_url = common::spawn_router(router).await;
    let client = common::http_storage_client(&base_url);

    let result = client.fetch("42").await;

    assert!(matches!(result, Err(StorageError::Decode(_))));
}

#[tokio::test]
async fn test_custom_paths() {
    let router = Router::new()
        .route(
            "/kv/put",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({ "key": "1", "value": "https://a.example" }));
                Json(json!({ "message": "Success", "status": 200 }))
            }),
        )
        .route(
            "/kv/get/{key}",
            get(|| async { Json(json!({ "key": "1", "value": "https://a.example" })) }),
        );
    let base_url = common::spawn_router(router).await;
    let client = HttpStorageClient::new(&HttpStorageClientConfig {
        base_url,
        set_path: "/kv/put".to_string(),
        get_path: "/kv/get/".to_string(),
        ..Default::default()
    })
    .unwrap();

    client.store("1", "https://a.example").await.unwrap();
    assert_eq!(client.fetch("1").await.unwrap().value, "https://a.example");
}

#[tokio::test]
async fn test_unreachable_facade() {
    let base_url = common::closed_port_url().await;
    let client = common::http_storage_client(&base_url);

    assert!(matches!(
        client.store("42", "https://example.com").await,
        Err(StorageError::Transport(_))
    ));
    assert!(matches!(
        client.fetch("42").await,
        Err(StorageError::Transport(_))
    ));
    assert!(matches!(client.ping().await, Err(StorageError::Transport(_))));
}

#[tokio::test]
async fn test_slow_facade_times_out() {
    let router = Router::new().route(
        "/get-key/{key}",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "key": "42", "value": "https://example.com" }))
        }),
    );
    let base_url = common::spawn_router(router).await;
    let client = HttpStorageClient::new(&HttpStorageClientConfig {
        base_url,
        timeout: Duration::from_millis(100),
        ..Default::default()
    })
    .unwrap();

    let result = client.fetch("42").await;

    assert!(matches!(result, Err(StorageError::Transport(_))));
}
