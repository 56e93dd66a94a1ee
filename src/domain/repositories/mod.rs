//! Storage contract for the domain layer.
//!
//! The shortening and redirect services never talk to the cache engine
//! directly. They go through [`StorageClient`], implemented over HTTP by
//! [`crate::infrastructure::storage_client::HttpStorageClient`].
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod storage_client;

pub use storage_client::{StorageClient, StorageError};

#[cfg(test)]
pub use storage_client::MockStorageClient;
