//! Storage client trait for persisting and fetching records.

use crate::domain::entities::Record;
use async_trait::async_trait;

/// Errors reported by a [`StorageClient`].
///
/// `NotFound` is a normal outcome rather than a fault, so callers can tell
/// "absent" apart from "broken".
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The call could not be completed (connection refused, timeout, ...).
    #[error("storage service unreachable: {0}")]
    Transport(String),

    /// The storage service answered a write with a non-success status.
    #[error("storage service rejected the write with status {status}")]
    Persist { status: u16 },

    /// The storage service reports the key as absent.
    #[error("key '{key}' not found")]
    NotFound { key: String },

    /// The storage service answered a read with an unexpected failure status.
    #[error("storage service answered with status {status}")]
    Upstream { status: u16 },

    /// The response body could not be parsed into the expected shape.
    #[error("failed to decode storage response: {0}")]
    Decode(String),

    /// The client was built with an unusable address.
    #[error("invalid storage client configuration: {0}")]
    Configuration(String),
}

/// Client for the key-value storage facade.
///
/// Implementations must be thread-safe; a single instance is shared by all
/// request handlers. Calls are not retried.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage_client::HttpStorageClient`] - HTTP client with a fixed timeout
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Writes `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// - [`StorageError::Transport`] if the request cannot be completed
    /// - [`StorageError::Persist`] if the facade answers with a failure status
    async fn store(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Reads the record stored under `key`.
    ///
    /// # Errors
    ///
    /// - [`StorageError::Transport`] if the request cannot be completed
    /// - [`StorageError::NotFound`] if the key is absent
    /// - [`StorageError::Upstream`] on any other failure status
    /// - [`StorageError::Decode`] if the body is not a record
    async fn fetch(&self, key: &str) -> Result<Record, StorageError>;

    /// Checks that the facade and its engine are reachable.
    ///
    /// Returns the engine's pong text.
    async fn ping(&self) -> Result<String, StorageError>;
}
