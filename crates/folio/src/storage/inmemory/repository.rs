//! In-memory repository implementation.
//!
//! Holds everything behind `RwLock`s; uniqueness and parent-existence checks
//! run under the books write lock so concurrent creates cannot both pass.
//! Data does not survive the process. Meant for tests and local development.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use folio_core::catalog::{Book, NewBook, NewReview, Review};
use folio_core::storage::{BookRepository, Page, Result, ReviewRepository, StoreError};

/// Volatile book and review storage.
pub struct InMemoryRepository {
    books: RwLock<Vec<Book>>,
    reviews: RwLock<Vec<Review>>,
    next_book_id: AtomicI64,
    next_review_id: AtomicI64,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(Vec::new()),
            reviews: RwLock::new(Vec::new()),
            next_book_id: AtomicI64::new(1),
            next_review_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn window<T: Clone>(items: impl Iterator<Item = T>, page: Page) -> Vec<T> {
    let skip = usize::try_from(page.skip).unwrap_or(usize::MAX);
    let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);
    items.skip(skip).take(limit).collect()
}

#[async_trait]
impl BookRepository for InMemoryRepository {
    async fn insert_book(&self, book: &NewBook) -> Result<Book> {
        let mut books = self.books.write().await;

        if let Some(isbn) = &book.isbn {
            if books.iter().any(|b| b.isbn.as_deref() == Some(isbn)) {
                return Err(StoreError::Conflict {
                    entity: "Book",
                    detail: format!("isbn {isbn} already exists"),
                });
            }
        }

        let stored = Book {
            id: self.next_book_id.fetch_add(1, Ordering::Relaxed),
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            description: book.description.clone(),
            published_year: book.published_year,
            created_at: Utc::now(),
            updated_at: None,
        };
        books.push(stored.clone());
        Ok(stored)
    }

    async fn find_book_by_id(&self, id: i64) -> Result<Option<Book>> {
        let books = self.books.read().await;
        Ok(books.iter().find(|b| b.id == id).cloned())
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> Result<Option<Book>> {
        let books = self.books.read().await;
        Ok(books
            .iter()
            .find(|b| b.isbn.as_deref() == Some(isbn))
            .cloned())
    }

    async fn list_books(&self, page: Page) -> Result<Vec<Book>> {
        let books = self.books.read().await;
        Ok(window(books.iter().cloned(), page))
    }
}

#[async_trait]
impl ReviewRepository for InMemoryRepository {
    async fn insert_review(&self, book_id: i64, review: &NewReview) -> Result<Review> {
        // Lock books first so the parent cannot be checked and removed
        // concurrently with the insert.
        let books = self.books.read().await;
        if !books.iter().any(|b| b.id == book_id) {
            return Err(StoreError::NotFound {
                entity: "Book",
                id: book_id.to_string(),
            });
        }

        let stored = Review {
            id: self.next_review_id.fetch_add(1, Ordering::Relaxed),
            book_id,
            reviewer_name: review.reviewer_name.clone(),
            rating: review.rating,
            comment: review.comment.clone(),
            created_at: Utc::now(),
            updated_at: None,
        };
        self.reviews.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn list_reviews_by_book(&self, book_id: i64, page: Page) -> Result<Vec<Review>> {
        let reviews = self.reviews.read().await;
        let mut matching: Vec<Review> = reviews
            .iter()
            .filter(|r| r.book_id == book_id)
            .cloned()
            .collect();
        // Newest first; id breaks ties between same-instant inserts.
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(window(matching.into_iter(), page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_book(title: &str, isbn: Option<&str>) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: "author".to_string(),
            isbn: isbn.map(str::to_string),
            description: None,
            published_year: None,
        }
    }

    fn new_review(name: &str) -> NewReview {
        NewReview {
            reviewer_name: name.to_string(),
            rating: 4.0,
            comment: None,
        }
    }

    #[tokio::test]
    async fn test_ids_are_assigned_sequentially() {
        let repo = InMemoryRepository::new();

        let a = repo.insert_book(&new_book("A", None)).await.unwrap();
        let b = repo.insert_book(&new_book("B", None)).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn test_duplicate_isbn_is_conflict() {
        let repo = InMemoryRepository::new();

        repo.insert_book(&new_book("A", Some("9780441172719")))
            .await
            .unwrap();
        let err = repo
            .insert_book(&new_book("B", Some("9780441172719")))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict { entity: "Book", .. }));

        // Books without an isbn never collide.
        repo.insert_book(&new_book("C", None)).await.unwrap();
        repo.insert_book(&new_book("D", None)).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_books_window() {
        let repo = InMemoryRepository::new();
        for i in 0..5 {
            repo.insert_book(&new_book(&format!("book {i}"), None))
                .await
                .unwrap();
        }

        assert_eq!(repo.list_books(Page::default()).await.unwrap().len(), 5);
        assert_eq!(repo.list_books(Page::new(3, 100)).await.unwrap().len(), 2);
        assert!(repo.list_books(Page::new(10, 100)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_review_requires_existing_book() {
        let repo = InMemoryRepository::new();

        let err = repo.insert_review(1, &new_review("alice")).await.unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound {
                entity: "Book",
                id: "1".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_reviews_scoped_to_book_and_newest_first() {
        let repo = InMemoryRepository::new();
        let a = repo.insert_book(&new_book("A", None)).await.unwrap();
        let b = repo.insert_book(&new_book("B", None)).await.unwrap();

        repo.insert_review(a.id, &new_review("first")).await.unwrap();
        repo.insert_review(b.id, &new_review("other")).await.unwrap();
        repo.insert_review(a.id, &new_review("second")).await.unwrap();

        let reviews = repo
            .list_reviews_by_book(a.id, Page::default())
            .await
            .unwrap();
        let names: Vec<&str> = reviews.iter().map(|r| r.reviewer_name.as_str()).collect();
        assert_eq!(names, vec!["second", "first"]);
    }
}
