#![cfg(test)]
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::storage::{KvStore, MemoryStore, SharedStore, StoreError};

/// Wraps a `MemoryStore` and fails every command that touches a poisoned
/// key, or a key under a poisoned prefix.
#[derive(Clone, Default)]
pub struct FaultyStore {
    pub inner: MemoryStore,
    poisoned: Arc<Mutex<HashSet<String>>>,
    poisoned_prefixes: Arc<Mutex<Vec<String>>>,
}

impl FaultyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn poison(&self, key: &str) {
        self.poisoned.lock().unwrap().insert(key.to_string());
    }

    pub fn poison_prefix(&self, prefix: &str) {
        self.poisoned_prefixes.lock().unwrap().push(prefix.to_string());
    }

    pub fn shared(&self) -> SharedStore {
        Arc::new(self.clone())
    }

    fn check(&self, key: &str) -> Result<(), StoreError> {
        let by_prefix = self.poisoned_prefixes.lock().unwrap().iter().any(|p| key.starts_with(p.as_str()));
        if by_prefix || self.poisoned.lock().unwrap().contains(key) {
            return Err(StoreError::Connection(format!("injected failure on {key}")));
        }
        Ok(())
    }
}

#[async_trait]
impl KvStore for FaultyStore {
    async fn hset(&self, key: &str, fields: &[(&str, String)]) -> Result<(), StoreError> {
        self.check(key)?;
        self.inner.hset(key, fields).await
    }
    async fn hget(&self, key: &str, field: &str) -> Result<Option<String>, StoreError> {
        self.check(key)?;
        self.inner.hget(key, field).await
    }
    async fn hgetall(&self, key: &str) -> Result<HashMap<String, String>, StoreError> {
        self.check(key)?;
        self.inner.hgetall(key).await
    }
    async fn hincrby(&self, key: &str, field: &str, delta: i64) -> Result<i64, StoreError> {
        self.check(key)?;
        self.inner.hincrby(key, field, delta).await
    }
    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        self.check(key)?;
        self.inner.exists(key).await
    }
    async fn del(&self, key: &str) -> Result<u64, StoreError> {
        self.check(key)?;
        self.inner.del(key).await
    }
    async fn sadd(&self, key: &str, member: &str) -> Result<u64, StoreError> {
        self.check(key)?;
        self.inner.sadd(key, member).await
    }
    async fn smembers(&self, key: &str) -> Result<Vec<String>, StoreError> {
        self.check(key)?;
        self.inner.smembers(key).await
    }
    async fn lpush(&self, key: &str, value: &str) -> Result<u64, StoreError> {
        self.check(key)?;
        self.inner.lpush(key, value).await
    }
    async fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>, StoreError> {
        self.check(key)?;
        self.inner.lrange(key, start, stop).await
    }
    async fn lrem(&self, key: &str, count: i64, value: &str) -> Result<u64, StoreError> {
        self.check(key)?;
        self.inner.lrem(key, count, value).await
    }
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check(key)?;
        self.inner.set(key, value).await
    }
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check(key)?;
        self.inner.get(key).await
    }
}
