//! Domain layer containing the record model and the storage contract.
//!
//! The domain layer has no dependency on HTTP frameworks or the cache engine.
//! Services in [`crate::application::services`] depend only on the traits
//! defined here; concrete implementations live in [`crate::infrastructure`].
//!
//! # Architecture
//!
//! - [`entities`] - The persisted [`entities::Record`]
//! - [`repositories`] - The [`repositories::StorageClient`] contract and its errors

pub mod entities;
pub mod repositories;
