//! Row-to-domain conversions and timestamp formatting.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Row;

use folio_core::catalog::{Book, Review};

/// Formats a timestamp as RFC 3339 with microsecond precision.
///
/// Microseconds are kept so snapshots compare field-for-field equal after a
/// store round-trip; RFC 3339 text also sorts chronologically, which the
/// review `ORDER BY created_at DESC` relies on.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Current time truncated to microseconds, the precision the store keeps.
///
/// Inserts use this so the snapshot returned to the caller compares equal
/// to what a later read parses back out.
pub fn now_micros() -> DateTime<Utc> {
    let now = Utc::now();
    let sub_micro_nanos = i64::from(now.timestamp_subsec_nanos() % 1_000);
    now - chrono::Duration::nanoseconds(sub_micro_nanos)
}

/// Parses a timestamp stored by [`format_datetime`].
pub fn parse_datetime(raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}

/// Converts a row from a book SELECT into a [`Book`].
pub fn row_to_book(row: &Row<'_>) -> rusqlite::Result<Book> {
    let created_at: String = row.get(6)?;
    let updated_at: Option<String> = row.get(7)?;
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        isbn: row.get(3)?,
        description: row.get(4)?,
        published_year: row.get(5)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: updated_at.as_deref().map(parse_datetime).transpose()?,
    })
}

/// Converts a row from a review SELECT into a [`Review`].
pub fn row_to_review(row: &Row<'_>) -> rusqlite::Result<Review> {
    let created_at: String = row.get(5)?;
    let updated_at: Option<String> = row.get(6)?;
    Ok(Review {
        id: row.get(0)?,
        book_id: row.get(1)?,
        reviewer_name: row.get(2)?,
        rating: row.get(3)?,
        comment: row.get(4)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: updated_at.as_deref().map(parse_datetime).transpose()?,
    })
}
