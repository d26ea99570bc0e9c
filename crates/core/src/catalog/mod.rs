//! Catalog domain types and input validation.

mod types;
mod validation;

pub use types::{Book, NewBook, NewReview, Review};
pub use validation::{validate_new_book, validate_new_review, ValidationError};
