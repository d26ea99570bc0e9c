//! Pure mapping from store errors to HTTP status codes.

use super::StoreError;

/// Maps a [`StoreError`] to an HTTP status code.
///
/// - `NotFound` -> 404
/// - `Conflict` -> 409
/// - `ConnectionFailed` -> 503
/// - `QueryFailed` -> 500
///
/// # Examples
///
/// ```
/// use folio_core::storage::{store_error_to_status_code, StoreError};
///
/// assert_eq!(store_error_to_status_code(&StoreError::book_not_found(7)), 404);
/// ```
pub fn store_error_to_status_code(error: &StoreError) -> u16 {
    match error {
        StoreError::NotFound { .. } => 404,
        StoreError::Conflict { .. } => 409,
        StoreError::ConnectionFailed(_) => 503,
        StoreError::QueryFailed(_) => 500,
    }
}
