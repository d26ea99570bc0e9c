//! Read-through service for reviews.

use std::sync::Arc;

use crate::cache::{review_list_key, review_list_pattern, CacheClient};
use crate::catalog::{NewReview, Review};
use crate::storage::{BookRepository, Page, Result, ReviewRepository, StoreError};

/// Cache-accelerated review operations, always scoped to a parent book.
pub struct ReviewService {
    reviews: Arc<dyn ReviewRepository>,
    books: Arc<dyn BookRepository>,
    cache: Arc<CacheClient>,
}

impl ReviewService {
    pub fn new(
        reviews: Arc<dyn ReviewRepository>,
        books: Arc<dyn BookRepository>,
        cache: Arc<CacheClient>,
    ) -> Self {
        Self {
            reviews,
            books,
            cache,
        }
    }

    /// Lists a book's reviews, newest first, cache first.
    ///
    /// The parent existence gate runs on every call, before the cache:
    /// cache entries never encode "the book exists".
    pub async fn list_reviews(&self, book_id: i64, page: Page) -> Result<Vec<Review>> {
        if self.books.find_book_by_id(book_id).await?.is_none() {
            return Err(StoreError::book_not_found(book_id));
        }

        let key = review_list_key(book_id, page.skip, page.limit);

        if let Some(reviews) = self.cache.get::<Vec<Review>>(&key).await {
            tracing::trace!(book_id, key, "Review list served from cache");
            return Ok(reviews);
        }

        tracing::trace!(book_id, key, "Review list cache miss");
        let reviews = self.reviews.list_reviews_by_book(book_id, page).await?;

        self.cache.set(&key, &reviews, None).await;

        Ok(reviews)
    }

    /// Creates a review, then invalidates only that book's cached windows.
    ///
    /// The existence gate runs before any mutation; if the book vanishes
    /// between the gate and the insert, the store's foreign-key constraint
    /// rejects the insert and the repository reports `NotFound`.
    pub async fn create_review(&self, book_id: i64, new_review: NewReview) -> Result<Review> {
        if self.books.find_book_by_id(book_id).await?.is_none() {
            return Err(StoreError::book_not_found(book_id));
        }

        let review = self.reviews.insert_review(book_id, &new_review).await?;

        let removed = self
            .cache
            .invalidate_pattern(&review_list_pattern(book_id))
            .await;
        tracing::debug!(
            book_id,
            review_id = review.id,
            removed,
            "Review created, book's review cache invalidated"
        );

        Ok(review)
    }
}
