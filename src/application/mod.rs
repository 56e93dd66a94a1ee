//! Application layer services implementing the shortening flow.
//!
//! Services consume the [`crate::domain::repositories::StorageClient`] trait
//! and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - URL validation, key derivation, persistence
//! - [`services::redirect_service::RedirectService`] - Key extraction and target resolution

pub mod services;
