//! Cache key and invalidation-pattern constructors.
//!
//! The key format is an internal contract between the cache-aside client
//! and the read-through services; it is never exposed to API callers.
//! Distinct pagination windows are distinct keys by design.

/// Key for a cached page of the book list.
pub fn book_list_key(skip: u64, limit: u64) -> String {
    format!("books:list:{skip}:{limit}")
}

/// Pattern matching every cached page of the book list.
///
/// Book lists have no natural partition key, so invalidation covers the
/// whole family.
pub fn book_list_pattern() -> &'static str {
    "books:list:*"
}

/// Key for a cached page of one book's reviews.
pub fn review_list_key(book_id: i64, skip: u64, limit: u64) -> String {
    format!("reviews:book:{book_id}:{skip}:{limit}")
}

/// Pattern matching every cached review page for one book.
///
/// Review lists are partitioned by parent, so invalidation stays scoped to
/// the book that changed.
pub fn review_list_pattern(book_id: i64) -> String {
    format!("reviews:book:{book_id}:*")
}
