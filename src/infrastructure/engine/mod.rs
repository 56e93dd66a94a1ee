//! Key-value engines backing the storage facade.
//!
//! Provides a [`KvEngine`] trait with two implementations:
//! - [`RedisEngine`] - Redis-backed engine, entries never expire
//! - [`MemoryEngine`] - In-process concurrent map for development and tests

mod memory_engine;
mod redis_engine;
mod service;

pub use memory_engine::MemoryEngine;
pub use redis_engine::RedisEngine;
pub use service::{EngineError, EngineResult, KvEngine};
