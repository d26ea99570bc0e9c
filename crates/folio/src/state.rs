//! Shared application state.
//!
//! Holds the two read-through services behind `Arc` so cloning per request
//! is cheap. Concrete storage and cache backends are chosen at compile time
//! via feature flags; the factory functions below cover each supported
//! combination.

use std::sync::Arc;

use folio_core::cache::CacheClient;
use folio_core::service::{BookService, ReviewService};

use crate::config::Config;

/// Shared application state, cloned into each request handler.
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<BookService>,
    pub reviews: Arc<ReviewService>,
}

impl AppState {
    /// Wires the services from a repository implementing both traits and a
    /// cache client.
    fn build<R>(repo: Arc<R>, cache: Arc<CacheClient>) -> Self
    where
        R: folio_core::storage::BookRepository
            + folio_core::storage::ReviewRepository
            + 'static,
    {
        let books = Arc::new(BookService::new(repo.clone(), cache.clone()));
        let reviews = Arc::new(ReviewService::new(repo.clone(), repo, cache));
        Self { books, reviews }
    }

    fn cache_client(config: &Config, backend: Arc<dyn folio_core::cache::CacheBackend>) -> Arc<CacheClient> {
        Arc::new(CacheClient::with_settings(
            backend,
            config.cache_ttl(),
            config.cache_op_timeout(),
        ))
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let cache = Self::cache_client(config, Arc::new(MemoryCache::new(config.cache_max_entries)));
            Ok(Self::build(repo, cache))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let cache = Self::cache_client(config, Arc::new(RedisCache::new(&config.redis_url).await?));
            Ok(Self::build(repo, cache))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for local development without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());
            let cache = Self::cache_client(config, Arc::new(MemoryCache::new(config.cache_max_entries)));
            Ok(Self::build(repo, cache))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());
            let cache = Self::cache_client(config, Arc::new(RedisCache::new(&config.redis_url).await?));
            Ok(Self::build(repo, cache))
        }
    }
}

// ============================================================================
// Test support
// ============================================================================
