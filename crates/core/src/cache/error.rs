use thiserror::Error;

/// Errors raised by cache backends.
///
/// These never cross the [`CacheClient`](super::CacheClient) boundary: the
/// client absorbs them into miss/false/zero results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for cache backend operations.
pub type Result<T> = std::result::Result<T, CacheError>;
