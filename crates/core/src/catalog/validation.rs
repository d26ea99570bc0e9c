//! Input validation for catalog writes.
//!
//! Pure functions, no I/O. The services assume their inputs have already
//! passed these checks; the request layer rejects failures with 422.

use thiserror::Error;

use super::{NewBook, NewReview};

/// Maximum length for short text fields (title, author, reviewer name).
const MAX_NAME_LEN: usize = 255;

/// Inclusive rating bounds.
const MIN_RATING: f64 = 1.0;
const MAX_RATING: f64 = 5.0;

/// Inclusive publication year bounds.
const MIN_YEAR: i32 = 1000;
const MAX_YEAR: i32 = 2030;

/// Errors produced by input validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("isbn must be 10 or 13 digits")]
    InvalidIsbn,
    #[error("published_year must be between {MIN_YEAR} and {MAX_YEAR}, got {0}")]
    YearOutOfRange(i32),
    #[error("rating must be between {MIN_RATING} and {MAX_RATING}, got {0}")]
    RatingOutOfRange(f64),
}

fn check_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}

fn check_isbn(isbn: &str) -> Result<(), ValidationError> {
    let digits = isbn.len() == 10 || isbn.len() == 13;
    if digits && isbn.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidIsbn)
    }
}

/// Validates a book creation payload.
pub fn validate_new_book(book: &NewBook) -> Result<(), ValidationError> {
    check_name("title", &book.title)?;
    check_name("author", &book.author)?;
    if let Some(isbn) = &book.isbn {
        check_isbn(isbn)?;
    }
    if let Some(year) = book.published_year {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ValidationError::YearOutOfRange(year));
        }
    }
    Ok(())
}

/// Validates a review creation payload.
pub fn validate_new_review(review: &NewReview) -> Result<(), ValidationError> {
    check_name("reviewer_name", &review.reviewer_name)?;
    if !(MIN_RATING..=MAX_RATING).contains(&review.rating) || review.rating.is_nan() {
        return Err(ValidationError::RatingOutOfRange(review.rating));
    }
    Ok(())
}
