//! Redis cache backend using the connection manager for pooling and
//! transparent reconnection.
//!
//! Pattern enumeration uses `KEYS`, matching the invalidation contract:
//! expand the pattern to a concrete key set, then delete that set. The two
//! steps are separate commands, so a key created in between survives until
//! its TTL expires - an accepted staleness window. `KEYS` is O(n) over the
//! keyspace; this service's keyspace is small and fully TTL-bounded.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;

use folio_core::cache::{CacheBackend, Result};

use super::error::map_redis_error;

/// Redis-backed [`CacheBackend`].
pub struct RedisCache {
    conn: redis::aio::ConnectionManager,
}

impl RedisCache {
    /// Connects to Redis at `url` (e.g. `"redis://localhost:6379"`).
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ConnectionFailed` if the initial connection
    /// cannot be established. Later outages are reported per-operation and
    /// absorbed by the cache-aside client.
    pub async fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl CacheBackend for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        conn.get(key).await.map_err(map_redis_error)
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let mut conn = self.conn.clone();
        let seconds = ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(key, value, seconds)
            .await
            .map_err(map_redis_error)
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.conn.clone();
        let removed: u64 = conn.del(key).await.map_err(map_redis_error)?;
        Ok(removed > 0)
    }

    async fn keys_matching(&self, pattern: &str) -> Result<Vec<String>> {
        let mut conn = self.conn.clone();
        conn.keys(pattern).await.map_err(map_redis_error)
    }

    async fn delete_many(&self, keys: &[String]) -> Result<u64> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut conn = self.conn.clone();
        conn.del(keys).await.map_err(map_redis_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redis_url() -> String {
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    /// Skip test if Redis is not running.
    async fn get_test_cache() -> Option<RedisCache> {
        RedisCache::new(&redis_url()).await.ok()
    }

    fn test_key(suffix: &str) -> String {
        format!(
            "test:folio:{}:{}",
            std::process::id(),
            suffix
        )
    }

    #[tokio::test]
    async fn test_redis_set_get_delete() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = test_key("set_get");
        cache
            .set_with_ttl(&key, "payload", Duration::from_secs(30))
            .await
            .unwrap();
        assert_eq!(cache.get(&key).await.unwrap(), Some("payload".to_string()));

        assert!(cache.delete(&key).await.unwrap());
        assert_eq!(cache.get(&key).await.unwrap(), None);
        assert!(!cache.delete(&key).await.unwrap());
    }

    #[tokio::test]
    async fn test_redis_ttl_expiry() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = test_key("ttl");
        cache
            .set_with_ttl(&key, "expiring", Duration::from_secs(1))
            .await
            .unwrap();
        assert!(cache.get(&key).await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(cache.get(&key).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_redis_pattern_enumeration_and_bulk_delete() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let ttl = Duration::from_secs(30);
        let key1 = test_key("list:0:100");
        let key2 = test_key("list:10:100");
        let other = test_key("other");

        cache.set_with_ttl(&key1, "a", ttl).await.unwrap();
        cache.set_with_ttl(&key2, "b", ttl).await.unwrap();
        cache.set_with_ttl(&other, "c", ttl).await.unwrap();

        let pattern = test_key("list:*");
        let mut keys = cache.keys_matching(&pattern).await.unwrap();
        keys.sort();
        let mut expected = vec![key1.clone(), key2.clone()];
        expected.sort();
        assert_eq!(keys, expected);

        assert_eq!(cache.delete_many(&keys).await.unwrap(), 2);
        assert_eq!(cache.get(&key1).await.unwrap(), None);
        assert!(cache.get(&other).await.unwrap().is_some());

        cache.delete(&other).await.unwrap();
    }

    #[tokio::test]
    async fn test_redis_delete_many_empty_is_zero() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        assert_eq!(cache.delete_many(&[]).await.unwrap(), 0);
    }
}
