//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`engine`] - Key-value engines behind the storage facade (Redis and in-memory)
//! - [`storage_client`] - HTTP implementation of [`crate::domain::repositories::StorageClient`]

pub mod engine;
pub mod storage_client;
