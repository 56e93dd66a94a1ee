//! Shared state injected into request handlers.
//!
//! Each service owns its state explicitly; nothing is held in globals.

use std::sync::Arc;

use crate::application::services::{RedirectService, ShortenService};
use crate::domain::repositories::StorageClient;
use crate::infrastructure::engine::KvEngine;

/// State of the storage facade.
#[derive(Clone)]
pub struct StorageState {
    pub engine: Arc<dyn KvEngine>,
}

impl StorageState {
    pub fn new(engine: Arc<dyn KvEngine>) -> Self {
        Self { engine }
    }
}

/// State of the shortening/redirect service.
#[derive(Clone)]
pub struct ShortenerState {
    pub shorten_service: Arc<ShortenService>,
    pub redirect_service: Arc<RedirectService>,
    pub storage: Arc<dyn StorageClient>,
    /// Host prefix for short links; `None` uses the request's `Host` header.
    pub link_host: Option<String>,
}

impl ShortenerState {
    pub fn new(storage: Arc<dyn StorageClient>, link_host: Option<String>) -> Self {
        Self {
            shorten_service: Arc::new(ShortenService::new(storage.clone())),
            redirect_service: Arc::new(RedirectService::new(storage.clone())),
            storage,
            link_host,
        }
    }
}
