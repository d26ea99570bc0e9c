use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Raw key/value backend with per-key expiration and pattern enumeration.
///
/// Values are JSON text produced by the [`CacheClient`](super::CacheClient);
/// backends treat them as opaque strings. Any operation may fail with a
/// connectivity or protocol error - the client is responsible for absorbing
/// those.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Gets the value stored at `key`, if present and not expired.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` at `key`, expiring after `ttl`.
    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    /// Removes a single key. Returns `true` if a key was removed.
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Enumerates the keys currently matching a glob pattern (e.g.
    /// `"books:list:*"`). The snapshot is taken at call time; keys created
    /// afterwards are not included.
    async fn keys_matching(&self, pattern: &str) -> Result<Vec<String>>;

    /// Removes the given keys, returning how many existed.
    async fn delete_many(&self, keys: &[String]) -> Result<u64>;
}
