#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::extract::Request;
use axum::{Router, ServiceExt};
use hashlink::domain::entities::Record;
use hashlink::domain::repositories::{StorageClient, StorageError};
use hashlink::infrastructure::engine::{EngineError, EngineResult, KvEngine};
use hashlink::infrastructure::storage_client::{HttpStorageClient, HttpStorageClientConfig};
use hashlink::routes::storage_router;
use hashlink::state::{ShortenerState, StorageState};

/// How a [`FakeStorage`] answers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum FakeMode {
    Healthy,
    Unreachable,
    Corrupt,
}

/// In-memory [`StorageClient`] that counts calls.
pub struct FakeStorage {
    records: Mutex<HashMap<String, String>>,
    store_calls: AtomicUsize,
    fetch_calls: AtomicUsize,
    mode: FakeMode,
}

impl FakeStorage {
    pub fn new(mode: FakeMode) -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            store_calls: AtomicUsize::new(0),
            fetch_calls: AtomicUsize::new(0),
            mode,
        }
    }

    pub fn healthy() -> Self {
        Self::new(FakeMode::Healthy)
    }

    pub fn seed(&self, key: &str, value: &str) {
        self.records
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.records.lock().unwrap().get(key).cloned()
    }

    pub fn store_calls(&self) -> usize {
        self.store_calls.load(Ordering::SeqCst)
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StorageClient for FakeStorage {
    async fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.store_calls.fetch_add(1, Ordering::SeqCst);
        match self.mode {
            FakeMode::Unreachable => Err(StorageError::Transport("connection refused".to_string())),
            FakeMode::Corrupt => Err(StorageError::Persist { status: 422 }),
            FakeMode::Healthy => {
                self.seed(key, value);
                Ok(())
            }
        }
    }

    async fn fetch(&self, key: &str) -> Result<Record, StorageError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        match self.mode {
            FakeMode::Unreachable => Err(StorageError::Transport("connection refused".to_string())),
            FakeMode::Corrupt => Err(StorageError::Decode("missing field `value`".to_string())),
            FakeMode::Healthy => self
                .value(key)
                .map(|value| Record::new(key, value))
                .ok_or_else(|| StorageError::NotFound {
                    key: key.to_string(),
                }),
        }
    }

    async fn ping(&self) -> Result<String, StorageError> {
        match self.mode {
            FakeMode::Unreachable => Err(StorageError::Transport("connection refused".to_string())),
            _ => Ok("PONG".to_string()),
        }
    }
}

/// Engine whose every operation fails.
pub struct FailingEngine;

#[async_trait]
impl KvEngine for FailingEngine {
    async fn set(&self, _key: &str, _value: &str) -> EngineResult<()> {
        Err(EngineError::OperationError("READONLY replica".to_string()))
    }

    async fn get(&self, _key: &str) -> EngineResult<Option<String>> {
        Err(EngineError::ConnectionError("connection refused".to_string()))
    }

    async fn ping(&self) -> EngineResult<String> {
        Err(EngineError::ConnectionError("connection refused".to_string()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

pub fn create_shortener_state(storage: Arc<FakeStorage>) -> ShortenerState {
    ShortenerState::new(storage, None)
}

/// Serves the storage facade on an ephemeral port and returns its base URL.
pub async fn spawn_storage_facade(engine: Arc<dyn KvEngine>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = storage_router(StorageState::new(engine));

    tokio::spawn(async move {
        axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
            .await
            .unwrap();
    });

    format!("http://{addr}")
}

/// Serves an arbitrary router on an ephemeral port and returns its base URL.
pub async fn spawn_router(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

/// Returns the base URL of a port nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}")
}

pub fn http_storage_client(base_url: &str) -> HttpStorageClient {
    HttpStorageClient::new(&HttpStorageClientConfig {
        base_url: base_url.to_string(),
        ..Default::default()
    })
    .unwrap()
}
