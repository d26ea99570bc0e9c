//! Cache backend contract and the cache-aside client.
//!
//! [`CacheBackend`] is the raw key/value contract a backend (Redis,
//! in-process memory) implements; any call may fail. [`CacheClient`] wraps
//! a backend and absorbs every failure, so callers get a plain
//! miss/false/zero instead of an error. The cache is an accelerator only,
//! never a correctness dependency.

mod client;
mod error;
mod keys;
mod patterns;
mod traits;

pub use client::{CacheClient, DEFAULT_OP_TIMEOUT, DEFAULT_TTL};
pub use error::{CacheError, Result};
pub use keys::{book_list_key, book_list_pattern, review_list_key, review_list_pattern};
pub use patterns::pattern_matches;
pub use traits::CacheBackend;
