use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{KvStore, StoreError};

#[derive(Debug, Clone)]
enum Value {
    Str(String),
    Hash(HashMap<String, String>),
    Set(HashSet<String>),
    List(VecDeque<String>),
}

/// In-process store with Redis command semantics.
///
/// Used by tests and by `backend = "memory"` deployments. Aggregate keys
/// (hash, set, list) disappear once they become empty, as they do in Redis.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

fn wrong_type(key: &str) -> StoreError {
    StoreError::WrongType(key.to_string())
}

/// Resolve Redis-style inclusive bounds against a list of `len` elements.
fn resolve_range(len: usize, start: i64, stop: i64) -> Option<(usize, usize)> {
    let len = len as i64;
    let start = if start < 0 { (start + len).max(0) } else { start };
    let stop = if stop < 0 { stop + len } else { stop.min(len - 1) };
    if len == 0 || start >= len || stop < 0 || start > stop {
        return None;
    }
    Some((start as usize, stop as usize))
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn hset(&self, key: &str, fields: &[(&str, String)]) -> Result<(), StoreError> {
        if fields.is_empty() {
            return Err(StoreError::Command("wrong number of arguments for 'hset' command".into()));
        }
        let mut map = self.inner.write().await;
        let entry = map.entry(key.to_string()).or_insert_with(|| Value::Hash(HashMap::new()));
        let Value::Hash(hash) = entry else { return Err(wrong_type(key)) };
        for (field, value) in fields {
            hash.insert((*field).to_string(), value.clone());
        }
        Ok(())
    }

    async fn hget(&self, key: &str, field: &str) -> Result<Option<String>, StoreError> {
        let map = self.inner.read().await;
        match map.get(key) {
            None => Ok(None),
            Some(Value::Hash(hash)) => Ok(hash.get(field).cloned()),
            Some(_) => Err(wrong_type(key)),
        }
    }

    async fn hgetall(&self, key: &str) -> Result<HashMap<String, String>, StoreError> {
        let map = self.inner.read().await;
        match map.get(key) {
            None => Ok(HashMap::new()),
            Some(Value::Hash(hash)) => Ok(hash.clone()),
            Some(_) => Err(wrong_type(key)),
        }
    }

    async fn hincrby(&self, key: &str, field: &str, delta: i64) -> Result<i64, StoreError> {
        let mut map = self.inner.write().await;
        let entry = map.entry(key.to_string()).or_insert_with(|| Value::Hash(HashMap::new()));
        let Value::Hash(hash) = entry else { return Err(wrong_type(key)) };
        let current = match hash.get(field) {
            None => 0,
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| StoreError::Command("hash value is not an integer".into()))?,
        };
        let next = current
            .checked_add(delta)
            .ok_or_else(|| StoreError::Command("increment or decrement would overflow".into()))?;
        hash.insert(field.to_string(), next.to_string());
        Ok(next)
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.inner.read().await.contains_key(key))
    }

    async fn del(&self, key: &str) -> Result<u64, StoreError> {
        let mut map = self.inner.write().await;
        Ok(u64::from(map.remove(key).is_some()))
    }

    async fn sadd(&self, key: &str, member: &str) -> Result<u64, StoreError> {
        let mut map = self.inner.write().await;
        let entry = map.entry(key.to_string()).or_insert_with(|| Value::Set(HashSet::new()));
        let Value::Set(set) = entry else { return Err(wrong_type(key)) };
        Ok(u64::from(set.insert(member.to_string())))
    }

    async fn smembers(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let map = self.inner.read().await;
        match map.get(key) {
            None => Ok(Vec::new()),
            Some(Value::Set(set)) => Ok(set.iter().cloned().collect()),
            Some(_) => Err(wrong_type(key)),
        }
    }

    async fn lpush(&self, key: &str, value: &str) -> Result<u64, StoreError> {
        let mut map = self.inner.write().await;
        let entry = map.entry(key.to_string()).or_insert_with(|| Value::List(VecDeque::new()));
        let Value::List(list) = entry else { return Err(wrong_type(key)) };
        list.push_front(value.to_string());
        Ok(list.len() as u64)
    }

    async fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>, StoreError> {
        let map = self.inner.read().await;
        let list = match map.get(key) {
            None => return Ok(Vec::new()),
            Some(Value::List(list)) => list,
            Some(_) => return Err(wrong_type(key)),
        };
        Ok(match resolve_range(list.len(), start, stop) {
            Some((from, to)) => list.range(from..=to).cloned().collect(),
            None => Vec::new(),
        })
    }

    async fn lrem(&self, key: &str, count: i64, value: &str) -> Result<u64, StoreError> {
        let mut map = self.inner.write().await;
        let list = match map.get_mut(key) {
            None => return Ok(0),
            Some(Value::List(list)) => list,
            Some(_) => return Err(wrong_type(key)),
        };

        let limit = if count == 0 { usize::MAX } else { count.unsigned_abs() as usize };
        let mut removed = 0usize;
        if count >= 0 {
            let mut i = 0;
            while i < list.len() && removed < limit {
                if list[i] == value {
                    list.remove(i);
                    removed += 1;
                } else {
                    i += 1;
                }
            }
        } else {
            let mut i = list.len();
            while i > 0 && removed < limit {
                i -= 1;
                if list[i] == value {
                    list.remove(i);
                    removed += 1;
                }
            }
        }

        if list.is_empty() {
            map.remove(key);
        }
        Ok(removed as u64)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.inner.write().await;
        map.insert(key.to_string(), Value::Str(value.to_string()));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let map = self.inner.read().await;
        match map.get(key) {
            None => Ok(None),
            Some(Value::Str(s)) => Ok(Some(s.clone())),
            Some(_) => Err(wrong_type(key)),
        }
    }
}
