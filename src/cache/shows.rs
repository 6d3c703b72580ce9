use async_trait::async_trait;
use redis::AsyncCommands;

use crate::cache::CacheBackend;
use crate::redis_client::RedisClient;

pub fn show_key(show_id: i32) -> String {
    format!("show:{}", show_id)
}

pub fn screen_key(screen_id: i32) -> String {
    format!("screen:{}", screen_id)
}

#[async_trait]
impl CacheBackend for RedisClient {
    async fn get(&self, key: &str) -> Result<Option<String>, redis::RedisError> {
        let mut conn = self.conn.clone();
        conn.get(key).await
    }

    async fn set_ex(&self, key: &str, value: String, ttl_seconds: u64) -> Result<(), redis::RedisError> {
        let mut conn = self.conn.clone();
        conn.set_ex(key, value, ttl_seconds).await
    }
}
