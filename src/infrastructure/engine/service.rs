//! Engine trait and error types.

use async_trait::async_trait;

/// Errors that can occur during engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Engine connection error: {0}")]
    ConnectionError(String),
    #[error("Engine operation error: {0}")]
    OperationError(String),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Trait for the key-value store behind the facade.
///
/// Implementations must be safe for concurrent reads and writes. Writes are
/// unconditional upserts: the last writer wins and nothing is versioned.
/// Unlike a cache, errors must propagate so the facade can report them.
///
/// # Implementations
///
/// - [`crate::infrastructure::engine::RedisEngine`] - Redis-backed engine
/// - [`crate::infrastructure::engine::MemoryEngine`] - In-memory engine
#[async_trait]
pub trait KvEngine: Send + Sync {
    /// Stores `value` under `key`, replacing any previous value. No TTL.
    async fn set(&self, key: &str, value: &str) -> EngineResult<()>;

    /// Retrieves the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if the key exists
    /// - `Ok(None)` if it does not
    async fn get(&self, key: &str) -> EngineResult<Option<String>>;

    /// Checks engine reachability and returns its pong text.
    async fn ping(&self) -> EngineResult<String>;

    /// Short engine name for logs and health output.
    fn name(&self) -> &'static str;
}
