//! SQLite schema and SQL statements. Pure data, no I/O.

/// Schema initialization. Foreign keys are enforced per-connection via
/// `PRAGMA foreign_keys`, run in the same batch.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    isbn TEXT UNIQUE,
    description TEXT,
    published_year INTEGER,
    created_at TEXT NOT NULL,
    updated_at TEXT
);

CREATE TABLE IF NOT EXISTS reviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    book_id INTEGER NOT NULL,
    reviewer_name TEXT NOT NULL,
    rating REAL NOT NULL,
    comment TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT,
    FOREIGN KEY (book_id) REFERENCES books(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_books_title ON books(title);
CREATE INDEX IF NOT EXISTS idx_reviews_book_id ON reviews(book_id);
CREATE INDEX IF NOT EXISTS idx_reviews_book_rating ON reviews(book_id, rating);
"#;

// Book statements
pub const INSERT_BOOK: &str = r#"
INSERT INTO books (title, author, isbn, description, published_year, created_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

pub const SELECT_BOOK_BY_ID: &str = r#"
SELECT id, title, author, isbn, description, published_year, created_at, updated_at
FROM books
WHERE id = ?1
"#;

pub const SELECT_BOOK_BY_ISBN: &str = r#"
SELECT id, title, author, isbn, description, published_year, created_at, updated_at
FROM books
WHERE isbn = ?1
"#;

/// Deliberately has no ORDER BY: book list order is store-defined and not
/// part of the service's contract.
pub const SELECT_BOOKS_WINDOW: &str = r#"
SELECT id, title, author, isbn, description, published_year, created_at, updated_at
FROM books
LIMIT ?1 OFFSET ?2
"#;

// Review statements
pub const INSERT_REVIEW: &str = r#"
INSERT INTO reviews (book_id, reviewer_name, rating, comment, created_at)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_REVIEWS_BY_BOOK_WINDOW: &str = r#"
SELECT id, book_id, reviewer_name, rating, comment, created_at, updated_at
FROM reviews
WHERE book_id = ?1
ORDER BY created_at DESC, id DESC
LIMIT ?2 OFFSET ?3
"#;
