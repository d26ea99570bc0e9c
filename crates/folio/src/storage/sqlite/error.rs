//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` / `rusqlite::Error` to the `StoreError`
//! taxonomy. Constraint violations carry the domain meaning: UNIQUE means a
//! duplicate ISBN (`Conflict`), FOREIGN KEY on a review insert means the
//! parent book vanished between the existence gate and the insert
//! (`NotFound`).

use folio_core::storage::StoreError;

fn map_rusqlite_error(err: &rusqlite::Error, entity: &'static str, context: &str) -> StoreError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            StoreError::Conflict {
                entity,
                detail: format!("{context} already exists"),
            }
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            StoreError::NotFound {
                entity: "Book",
                id: context.to_string(),
            }
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            StoreError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound {
            entity,
            id: context.to_string(),
        },

        _ => StoreError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error, with `context` naming the id or unique
/// value involved in the statement.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity: &'static str,
    context: impl Into<String>,
) -> StoreError {
    let context = context.into();
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity, &context)
        }
        tokio_rusqlite::Error::Close(_) => {
            StoreError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => StoreError::QueryFailed(err.to_string()),
    }
}
