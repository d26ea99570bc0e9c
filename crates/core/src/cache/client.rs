//! Cache-aside client.
//!
//! Wraps a [`CacheBackend`] and enforces the "best effort only" contract:
//! no backend failure ever reaches the caller as an error, only as a miss,
//! a `false`, or a zero count. Each call attempts the backend regardless of
//! the availability flag - the attempt itself is the probe, so recovery
//! needs no extra call and no background health check.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{CacheBackend, Result};

/// Default entry TTL: five minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Default per-operation backend timeout.
pub const DEFAULT_OP_TIMEOUT: Duration = Duration::from_secs(2);

/// Best-effort cache client with an instance-scoped availability flag.
///
/// The flag is shared mutable state touched by every call; races on it are
/// benign (worst case one extra failed round-trip), so a relaxed atomic is
/// enough. One client instance corresponds to one logical backend
/// connection - independent clients (e.g. in tests) do not interfere.
pub struct CacheClient {
    backend: Arc<dyn CacheBackend>,
    available: AtomicBool,
    default_ttl: Duration,
    op_timeout: Duration,
}

impl CacheClient {
    /// Creates a client with the default TTL and operation timeout.
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self::with_settings(backend, DEFAULT_TTL, DEFAULT_OP_TIMEOUT)
    }

    /// Creates a client with explicit TTL and operation timeout.
    pub fn with_settings(
        backend: Arc<dyn CacheBackend>,
        default_ttl: Duration,
        op_timeout: Duration,
    ) -> Self {
        Self {
            backend,
            available: AtomicBool::new(true),
            default_ttl,
            op_timeout,
        }
    }

    /// Returns `false` while the backend is considered degraded.
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }

    /// Gets and deserializes the value at `key`.
    ///
    /// Returns `None` on a miss, a malformed payload, a backend failure, or
    /// a timeout - the caller cannot distinguish these, by design.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.run(key, self.backend.get(key)).await??;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "Malformed cache payload, treating as miss");
                None
            }
        }
    }

    /// Serializes and stores `value` at `key`.
    ///
    /// Returns `false` if serialization or the backend write fails. The
    /// result is informational only - the durable write this guards has
    /// already happened.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T, ttl: Option<Duration>) -> bool {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(key, error = %err, "Failed to serialize cache value");
                return false;
            }
        };
        let ttl = ttl.unwrap_or(self.default_ttl);
        self.run(key, self.backend.set_with_ttl(key, &raw, ttl))
            .await
            .is_some()
    }

    /// Removes a single key. Returns `false` on failure or if absent.
    pub async fn delete(&self, key: &str) -> bool {
        self.run(key, self.backend.delete(key))
            .await
            .unwrap_or(false)
    }

    /// Deletes every key matching `pattern`, returning the count removed.
    ///
    /// Enumeration and deletion are two separate backend operations; a key
    /// created in between survives until its TTL expires. Returns 0 on any
    /// failure.
    pub async fn invalidate_pattern(&self, pattern: &str) -> u64 {
        let Some(keys) = self.run(pattern, self.backend.keys_matching(pattern)).await else {
            return 0;
        };
        if keys.is_empty() {
            return 0;
        }
        self.run(pattern, self.backend.delete_many(&keys))
            .await
            .unwrap_or(0)
    }

    /// Runs one backend operation under the operation timeout and folds the
    /// outcome into the availability flag.
    async fn run<T>(&self, key: &str, op: impl Future<Output = Result<T>>) -> Option<T> {
        match tokio::time::timeout(self.op_timeout, op).await {
            Ok(Ok(value)) => {
                if !self.available.swap(true, Ordering::Relaxed) {
                    tracing::info!("Cache backend recovered");
                }
                Some(value)
            }
            Ok(Err(err)) => {
                self.mark_degraded(key, &err.to_string());
                None
            }
            Err(_) => {
                self.mark_degraded(key, "operation timed out");
                None
            }
        }
    }

    fn mark_degraded(&self, key: &str, reason: &str) {
        if self.available.swap(false, Ordering::Relaxed) {
            tracing::warn!(key, reason, "Cache backend degraded, continuing without cache");
        } else {
            tracing::debug!(key, reason, "Cache backend still degraded");
        }
    }
}
