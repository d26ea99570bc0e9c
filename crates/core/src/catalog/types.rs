use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A book in the catalog.
///
/// Identity and timestamps are assigned by the record store on insert and
/// are immutable afterwards. Snapshots of this type are what gets cached,
/// so it must round-trip losslessly through JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    /// External identifier, unique across the catalog when present.
    pub isbn: Option<String>,
    pub description: Option<String>,
    pub published_year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A review attached to exactly one book.
///
/// Cannot outlive its book: deleting the book cascades to its reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub book_id: i64,
    pub reviewer_name: String,
    /// Rating on an inclusive 1.0 to 5.0 scale.
    pub rating: f64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for creating a book. Validated before reaching the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub description: Option<String>,
    pub published_year: Option<i32>,
}

/// Input for creating a review. The parent book id comes from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub reviewer_name: String,
    pub rating: f64,
    pub comment: Option<String>,
}
