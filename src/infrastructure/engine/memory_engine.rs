//! In-process engine implementation.

use super::service::{EngineResult, KvEngine};
use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

/// An engine holding all entries in a sharded concurrent map.
///
/// Used when no Redis is configured. Entries live until the process exits;
/// there is no eviction.
#[derive(Default)]
pub struct MemoryEngine {
    entries: DashMap<String, String>,
}

impl MemoryEngine {
    pub fn new() -> Self {
        debug!("Using MemoryEngine (entries are not persisted)");
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl KvEngine for MemoryEngine {
    async fn set(&self, key: &str, value: &str) -> EngineResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> EngineResult<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn ping(&self) -> EngineResult<String> {
        Ok("PONG".to_string())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_set_then_get() {
        let engine = MemoryEngine::new();
        engine.set("42", "https://example.com").await.unwrap();

        let value = engine.get("42").await.unwrap();
        assert_eq!(value.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let engine = MemoryEngine::new();
        assert_eq!(engine.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let engine = MemoryEngine::new();
        engine.set("1", "first").await.unwrap();
        engine.set("1", "second").await.unwrap();

        assert_eq!(engine.get("1").await.unwrap().as_deref(), Some("second"));
        assert_eq!(engine.len(), 1);
    }

    #[tokio::test]
    async fn test_ping() {
        let engine = MemoryEngine::new();
        assert_eq!(engine.ping().await.unwrap(), "PONG");
        assert_eq!(engine.name(), "memory");
    }

    #[tokio::test]
    async fn test_concurrent_writes_to_distinct_keys() {
        let engine = Arc::new(MemoryEngine::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let engine = engine.clone();
                tokio::spawn(async move {
                    engine
                        .set(&i.to_string(), &format!("https://example.com/{i}"))
                        .await
                        .unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(engine.len(), 16);
        assert_eq!(
            engine.get("7").await.unwrap().as_deref(),
            Some("https://example.com/7")
        );
    }
}
