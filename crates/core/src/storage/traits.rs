use async_trait::async_trait;

use crate::catalog::{Book, NewBook, NewReview, Review};

use super::{Page, Result};

/// Repository for book storage.
///
/// Implementations assign identity and `created_at` on insert and enforce
/// the ISBN uniqueness constraint authoritatively (the service's optimistic
/// precheck is not atomic with the insert).
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Inserts a book, returning the stored record with id and timestamps.
    ///
    /// Fails with `Conflict` if the ISBN is already taken.
    async fn insert_book(&self, book: &NewBook) -> Result<Book>;

    /// Finds a book by id.
    async fn find_book_by_id(&self, id: i64) -> Result<Option<Book>>;

    /// Finds a book by its ISBN.
    async fn find_book_by_isbn(&self, isbn: &str) -> Result<Option<Book>>;

    /// Lists books for the given window.
    ///
    /// The order is store-defined and not guaranteed stable across calls.
    async fn list_books(&self, page: Page) -> Result<Vec<Book>>;
}

/// Repository for review storage.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Inserts a review under the given book.
    ///
    /// Fails with `NotFound` if the book does not exist (the store's
    /// foreign-key constraint backs the service's existence gate).
    async fn insert_review(&self, book_id: i64, review: &NewReview) -> Result<Review>;

    /// Lists a book's reviews, newest first, for the given window.
    async fn list_reviews_by_book(&self, book_id: i64, page: Page) -> Result<Vec<Review>>;
}
