//! SQLite repository implementation.
//!
//! Each insert is a single statement, so the store's own commit is the
//! durability boundary: a create either lands fully or not at all.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use folio_core::catalog::{Book, NewBook, NewReview, Review};
use folio_core::storage::{BookRepository, Page, Result, ReviewRepository, StoreError};

use super::conversions::{format_datetime, now_micros, row_to_book, row_to_review};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Clamps a pagination field for SQLite's signed LIMIT/OFFSET.
fn to_sql_bound(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// SQLite-backed book and review storage.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (creating if needed) a file-based database and initializes
    /// the schema.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Opens an in-memory database; data is lost when the connection drops.
    /// Useful for tests.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| StoreError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl BookRepository for SqliteRepository {
    async fn insert_book(&self, book: &NewBook) -> Result<Book> {
        let book = book.clone();
        let isbn_context = book
            .isbn
            .clone()
            .map(|isbn| format!("isbn {isbn}"))
            .unwrap_or_else(|| "book".to_string());

        self.conn
            .call(move |conn| {
                let created_at = now_micros();
                conn.execute(
                    schema::INSERT_BOOK,
                    rusqlite::params![
                        book.title,
                        book.author,
                        book.isbn,
                        book.description,
                        book.published_year,
                        format_datetime(&created_at),
                    ],
                )
                .map_err(wrap_err)?;

                Ok(Book {
                    id: conn.last_insert_rowid(),
                    title: book.title,
                    author: book.author,
                    isbn: book.isbn,
                    description: book.description,
                    published_year: book.published_year,
                    created_at,
                    updated_at: None,
                })
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Book", isbn_context))
    }

    async fn find_book_by_id(&self, id: i64) -> Result<Option<Book>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_BOOK_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_book) {
                    Ok(book) => Ok(Some(book)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Book", id.to_string()))
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> Result<Option<Book>> {
        let isbn = isbn.to_string();
        let isbn_context = isbn.clone();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_BOOK_BY_ISBN)
                    .map_err(wrap_err)?;
                match stmt.query_row([&isbn], row_to_book) {
                    Ok(book) => Ok(Some(book)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Book", isbn_context))
    }

    async fn list_books(&self, page: Page) -> Result<Vec<Book>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_BOOKS_WINDOW)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map(
                        [to_sql_bound(page.limit), to_sql_bound(page.skip)],
                        row_to_book,
                    )
                    .map_err(wrap_err)?;

                let mut books = Vec::new();
                for row in rows {
                    books.push(row.map_err(wrap_err)?);
                }
                Ok(books)
            })
            .await
            .map_err(|e| StoreError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl ReviewRepository for SqliteRepository {
    async fn insert_review(&self, book_id: i64, review: &NewReview) -> Result<Review> {
        let review = review.clone();

        self.conn
            .call(move |conn| {
                let created_at = now_micros();
                conn.execute(
                    schema::INSERT_REVIEW,
                    rusqlite::params![
                        book_id,
                        review.reviewer_name,
                        review.rating,
                        review.comment,
                        format_datetime(&created_at),
                    ],
                )
                .map_err(wrap_err)?;

                Ok(Review {
                    id: conn.last_insert_rowid(),
                    book_id,
                    reviewer_name: review.reviewer_name,
                    rating: review.rating,
                    comment: review.comment,
                    created_at,
                    updated_at: None,
                })
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Review", book_id.to_string()))
    }

    async fn list_reviews_by_book(&self, book_id: i64, page: Page) -> Result<Vec<Review>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_REVIEWS_BY_BOOK_WINDOW)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map(
                        [book_id, to_sql_bound(page.limit), to_sql_bound(page.skip)],
                        row_to_review,
                    )
                    .map_err(wrap_err)?;

                let mut reviews = Vec::new();
                for row in rows {
                    reviews.push(row.map_err(wrap_err)?);
                }
                Ok(reviews)
            })
            .await
            .map_err(|e| StoreError::QueryFailed(e.to_string()))
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
            description: Some("a description".to_string()),
            published_year: Some(1999),
        }
    }

    fn new_review(name: &str, rating: f64) -> NewReview {
        NewReview {
            reviewer_name: name.to_string(),
            rating,
            comment: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_created_at() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let book = repo.insert_book(&new_book("A", None)).await.unwrap();
        assert!(book.id > 0);
        assert!(book.updated_at.is_none());

        let found = repo.find_book_by_id(book.id).await.unwrap().unwrap();
        assert_eq!(found, book);
    }

    #[tokio::test]
    async fn test_find_by_isbn() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        repo.insert_book(&new_book("A", Some("9780441172719")))
            .await
            .unwrap();

        let found = repo.find_book_by_isbn("9780441172719").await.unwrap();
        assert_eq!(found.unwrap().title, "A");
        assert!(repo.find_book_by_isbn("0000000000").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_isbn_is_conflict() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        repo.insert_book(&new_book("A", Some("9780441172719")))
            .await
            .unwrap();
        let err = repo
            .insert_book(&new_book("B", Some("9780441172719")))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Conflict { entity: "Book", .. }));
    }

    #[tokio::test]
    async fn test_list_books_window() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        for i in 0..5 {
            repo.insert_book(&new_book(&format!("book {i}"), None))
                .await
                .unwrap();
        }

        let all = repo.list_books(Page::new(0, 100)).await.unwrap();
        assert_eq!(all.len(), 5);

        let window = repo.list_books(Page::new(2, 2)).await.unwrap();
        assert_eq!(window.len(), 2);

        let past_end = repo.list_books(Page::new(10, 100)).await.unwrap();
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    async fn test_insert_review_under_missing_book_is_not_found() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let err = repo
            .insert_review(999999, &new_review("alice", 4.0))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound {
                entity: "Book",
                id: "999999".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_reviews_listed_newest_first() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let book = repo.insert_book(&new_book("A", None)).await.unwrap();

        for name in ["first", "second", "third"] {
            repo.insert_review(book.id, &new_review(name, 3.0))
                .await
                .unwrap();
        }

        let reviews = repo
            .list_reviews_by_book(book.id, Page::default())
            .await
            .unwrap();
        let names: Vec<&str> = reviews.iter().map(|r| r.reviewer_name.as_str()).collect();
        assert_eq!(names, vec!["third", "second", "first"]);

        let window = repo
            .list_reviews_by_book(book.id, Page::new(1, 1))
            .await
            .unwrap();
        assert_eq!(window[0].reviewer_name, "second");
    }

    #[tokio::test]
    async fn test_review_round_trips_through_store() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let book = repo.insert_book(&new_book("A", None)).await.unwrap();

        let inserted = repo
            .insert_review(
                book.id,
                &NewReview {
                    reviewer_name: "alice".to_string(),
                    rating: 4.5,
                    comment: Some("comment".to_string()),
                },
            )
            .await
            .unwrap();

        let listed = repo
            .list_reviews_by_book(book.id, Page::default())
            .await
            .unwrap();
        assert_eq!(listed, vec![inserted]);
    }
}
