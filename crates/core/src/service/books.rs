//! Read-through service for books.

use std::sync::Arc;

use crate::cache::{book_list_key, book_list_pattern, CacheClient};
use crate::catalog::{Book, NewBook};
use crate::storage::{BookRepository, Page, Result, StoreError};

/// Cache-accelerated book operations.
pub struct BookService {
    repo: Arc<dyn BookRepository>,
    cache: Arc<CacheClient>,
}

impl BookService {
    pub fn new(repo: Arc<dyn BookRepository>, cache: Arc<CacheClient>) -> Self {
        Self { repo, cache }
    }

    /// Lists books for a window, cache first.
    ///
    /// Each `(skip, limit)` window is its own cache entry. A cache hit is
    /// returned verbatim without re-validating against the store.
    pub async fn list_books(&self, page: Page) -> Result<Vec<Book>> {
        let key = book_list_key(page.skip, page.limit);

        if let Some(books) = self.cache.get::<Vec<Book>>(&key).await {
            tracing::trace!(key, "Book list served from cache");
            return Ok(books);
        }

        tracing::trace!(key, "Book list cache miss");
        let books = self.repo.list_books(page).await?;

        // Repopulate; the outcome does not affect the response.
        self.cache.set(&key, &books, None).await;

        Ok(books)
    }

    /// Creates a book, then invalidates every cached book-list window.
    ///
    /// The ISBN precheck is optimistic: a concurrent create racing past it
    /// is rejected by the store's uniqueness constraint, which the
    /// repository also maps to `Conflict`.
    pub async fn create_book(&self, new_book: NewBook) -> Result<Book> {
        if let Some(isbn) = &new_book.isbn {
            if self.repo.find_book_by_isbn(isbn).await?.is_some() {
                return Err(StoreError::Conflict {
                    entity: "Book",
                    detail: format!("isbn {isbn} already exists"),
                });
            }
        }

        let book = self.repo.insert_book(&new_book).await?;

        // Book lists have no partition key, so invalidate the whole family.
        // Failure here only extends staleness until TTL expiry.
        let removed = self.cache.invalidate_pattern(book_list_pattern()).await;
        tracing::debug!(book_id = book.id, removed, "Book created, list cache invalidated");

        Ok(book)
    }

    /// Fetches a single book, store only.
    pub async fn get_book(&self, id: i64) -> Result<Book> {
        self.repo
            .find_book_by_id(id)
            .await?
            .ok_or_else(|| StoreError::book_not_found(id))
    }
}
