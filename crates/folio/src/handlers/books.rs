use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use folio_core::catalog::{validate_new_book, Book, NewBook};

use crate::{
    handlers::{AppError, PageQuery},
    state::AppState,
};

/// List books for a pagination window (GET /books).
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<Book>>, AppError> {
    let books = state.books.list_books(query.into()).await?;
    Ok(Json(books))
}

/// Create a new book (POST /books).
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<NewBook>,
) -> Result<impl IntoResponse, AppError> {
    validate_new_book(&payload)?;

    let book = state.books.create_book(payload).await?;

    tracing::info!(book_id = book.id, title = %book.title, "Created new book");

    Ok((StatusCode::CREATED, Json(book)))
}
