use thiserror::Error;

/// Errors that can occur during record store operations.
///
/// Domain violations (`NotFound`, `Conflict`) propagate to the caller as
/// typed outcomes; infrastructure failures are fatal to the request and are
/// never retried here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    #[error("{entity} conflict: {detail}")]
    Conflict { entity: &'static str, detail: String },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl StoreError {
    /// Shorthand for a missing book, the most common `NotFound`.
    pub fn book_not_found(id: i64) -> Self {
        StoreError::NotFound {
            entity: "Book",
            id: id.to_string(),
        }
    }
}

/// Result type for record store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        assert_eq!(
            StoreError::book_not_found(999999).to_string(),
            "Book not found: 999999"
        );
    }

    #[test]
    fn test_conflict_display() {
        let error = StoreError::Conflict {
            entity: "Book",
            detail: "isbn 9780441172719 already exists".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Book conflict: isbn 9780441172719 already exists"
        );
    }

    #[test]
    fn test_connection_failed_display() {
        let error = StoreError::ConnectionFailed("database locked".to_string());
        assert_eq!(error.to_string(), "Connection failed: database locked");
    }
}
