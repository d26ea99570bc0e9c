//! Redis error mapping.

use folio_core::cache::CacheError;

/// Maps a redis crate error to a [`CacheError`].
///
/// Connectivity problems (refused, dropped, timed out) map to
/// `ConnectionFailed`; everything else (protocol, type errors) to
/// `OperationFailed`.
pub(super) fn map_redis_error(err: redis::RedisError) -> CacheError {
    if err.is_connection_refusal() || err.is_timeout() || err.is_io_error() {
        CacheError::ConnectionFailed(err.to_string())
    } else {
        CacheError::OperationFailed(err.to_string())
    }
}
