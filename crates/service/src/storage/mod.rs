//! Key-value store abstraction consumed by the service layer.
//!
//! Only the small command subset the indexing scheme needs is exposed. The
//! semantics follow the Redis commands of the same name, and both backends
//! (`RedisStore`, `MemoryStore`) must honor them.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod redis_store;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),
    #[error("WRONGTYPE operation against key `{0}` holding the wrong kind of value")]
    WrongType(String),
    #[error("store command failed: {0}")]
    Command(String),
}

/// Primitive store commands. Each call is one round trip; callers that need
/// several commands issue them concurrently and join on the results.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// HSET with one or more field/value pairs.
    async fn hset(&self, key: &str, fields: &[(&str, String)]) -> Result<(), StoreError>;
    /// HGET; `None` when the key or the field is missing.
    async fn hget(&self, key: &str, field: &str) -> Result<Option<String>, StoreError>;
    /// HGETALL; a missing key yields an empty map.
    async fn hgetall(&self, key: &str) -> Result<HashMap<String, String>, StoreError>;
    /// HINCRBY; returns the value after the increment.
    async fn hincrby(&self, key: &str, field: &str, delta: i64) -> Result<i64, StoreError>;
    async fn exists(&self, key: &str) -> Result<bool, StoreError>;
    /// DEL; returns the number of keys removed.
    async fn del(&self, key: &str) -> Result<u64, StoreError>;
    /// SADD; returns 1 if the member was new.
    async fn sadd(&self, key: &str, member: &str) -> Result<u64, StoreError>;
    async fn smembers(&self, key: &str) -> Result<Vec<String>, StoreError>;
    /// LPUSH; returns the list length after the push.
    async fn lpush(&self, key: &str, value: &str) -> Result<u64, StoreError>;
    /// LRANGE with inclusive, zero-based, possibly negative bounds.
    async fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>, StoreError>;
    /// LREM; `count == 0` removes every occurrence. Returns removed count.
    async fn lrem(&self, key: &str, count: i64, value: &str) -> Result<u64, StoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
}

pub type SharedStore = Arc<dyn KvStore>;
