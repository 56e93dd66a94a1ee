//! # hashlink
//!
//! A checksum-keyed URL shortener and the key-value storage facade it
//! persists through, built with Axum.
//!
//! ## Architecture
//!
//! Two cooperating HTTP services share this crate:
//!
//! - **Storage facade** - `POST /set-key`, `GET /get-key/{key}`, `GET /ping`
//!   over a key-value engine (Redis or in-memory)
//! - **Shortener** - `GET /short?url=...` and `GET /r/{key}`, persisting
//!   records through the facade over HTTP
//!
//! The code follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The record entity and the storage client contract
//! - **Application Layer** ([`application`]) - Shortening and redirect services
//! - **Infrastructure Layer** ([`infrastructure`]) - Engines and the HTTP storage client
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//!
//! ## Keys
//!
//! A key is the Adler-32 checksum of the URL in decimal. Keys are
//! reproducible but not unique: colliding URLs overwrite each other and the
//! last write wins.
//!
//! ## Quick Start
//!
//! ```bash
//! # Storage facade (in-memory unless REDIS_URL is set)
//! cargo run -- storage
//!
//! # Shortener, talking to the facade on localhost:8080
//! cargo run -- shortener
//!
//! curl 'localhost:8081/short?url=https://example.com'
//! # localhost:8081/r/1203504933
//! ```
//!
//! ## Configuration
//!
//! Both services are configured from environment variables; see [`config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::{ShortenerState, StorageState};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{RedirectService, ShortenService};
    pub use crate::domain::entities::Record;
    pub use crate::domain::repositories::{StorageClient, StorageError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::engine::{KvEngine, MemoryEngine};
    pub use crate::infrastructure::storage_client::{HttpStorageClient, HttpStorageClientConfig};
    pub use crate::state::{ShortenerState, StorageState};
}
