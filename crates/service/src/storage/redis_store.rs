use std::collections::HashMap;

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client, RedisError};
use tracing::info;

use super::{KvStore, StoreError};

impl From<RedisError> for StoreError {
    fn from(e: RedisError) -> Self {
        if e.is_io_error() || e.is_connection_dropped() || e.is_connection_refusal() || e.is_timeout() {
            StoreError::Connection(e.to_string())
        } else if e.code() == Some("WRONGTYPE") || e.to_string().contains("WRONGTYPE") {
            StoreError::WrongType(e.to_string())
        } else {
            StoreError::Command(e.to_string())
        }
    }
}

/// Redis-backed store over a multiplexed, auto-reconnecting connection.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let client = Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;
        info!(event = "store_connected", backend = "redis", "connected to redis");
        Ok(Self { conn })
    }

    fn conn(&self) -> ConnectionManager {
        self.conn.clone()
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn hset(&self, key: &str, fields: &[(&str, String)]) -> Result<(), StoreError> {
        let () = self.conn().hset_multiple(key, fields).await?;
        Ok(())
    }

    async fn hget(&self, key: &str, field: &str) -> Result<Option<String>, StoreError> {
        Ok(self.conn().hget(key, field).await?)
    }

    async fn hgetall(&self, key: &str) -> Result<HashMap<String, String>, StoreError> {
        Ok(self.conn().hgetall(key).await?)
    }

    async fn hincrby(&self, key: &str, field: &str, delta: i64) -> Result<i64, StoreError> {
        Ok(self.conn().hincr(key, field, delta).await?)
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.conn().exists(key).await?)
    }

    async fn del(&self, key: &str) -> Result<u64, StoreError> {
        Ok(self.conn().del(key).await?)
    }

    async fn sadd(&self, key: &str, member: &str) -> Result<u64, StoreError> {
        Ok(self.conn().sadd(key, member).await?)
    }

    async fn smembers(&self, key: &str) -> Result<Vec<String>, StoreError> {
        Ok(self.conn().smembers(key).await?)
    }

    async fn lpush(&self, key: &str, value: &str) -> Result<u64, StoreError> {
        Ok(self.conn().lpush(key, value).await?)
    }

    async fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>, StoreError> {
        Ok(self.conn().lrange(key, start as isize, stop as isize).await?)
    }

    async fn lrem(&self, key: &str, count: i64, value: &str) -> Result<u64, StoreError> {
        Ok(self.conn().lrem(key, count as isize, value).await?)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let () = self.conn().set(key, value).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.conn().get(key).await?)
    }
}
