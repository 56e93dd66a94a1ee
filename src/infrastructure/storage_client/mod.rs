//! Outbound client for the storage facade.

mod http_storage_client;

pub use http_storage_client::{HttpStorageClient, HttpStorageClientConfig};
