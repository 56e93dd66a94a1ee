//! Redis-backed engine implementation.

use super::service::{EngineError, EngineResult, KvEngine};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info};

/// Redis engine used by the storage facade.
///
/// Uses `ConnectionManager` for connection reuse and automatic reconnects.
/// Values are written with plain `SET`, so retention is bounded only by the
/// Redis server's own eviction policy.
pub struct RedisEngine {
    client: ConnectionManager,
}

impl RedisEngine {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConnectionError`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> EngineResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            EngineError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            EngineError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| EngineError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }
}

#[async_trait]
impl KvEngine for RedisEngine {
    async fn set(&self, key: &str, value: &str) -> EngineResult<()> {
        let mut conn = self.client.clone();

        conn.set::<_, _, ()>(key, value).await.map_err(|e| {
            error!(key = %key, "Redis SET error: {}", e);
            EngineError::OperationError(e.to_string())
        })?;

        debug!(key = %key, "Redis SET");
        Ok(())
    }

    async fn get(&self, key: &str) -> EngineResult<Option<String>> {
        let mut conn = self.client.clone();

        let value = conn.get::<_, Option<String>>(key).await.map_err(|e| {
            error!(key = %key, "Redis GET error: {}", e);
            EngineError::OperationError(e.to_string())
        })?;

        debug!(key = %key, hit = value.is_some(), "Redis GET");
        Ok(value)
    }

    async fn ping(&self) -> EngineResult<String> {
        let mut conn = self.client.clone();
        conn.ping::<String>()
            .await
            .map_err(|e| EngineError::ConnectionError(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}
