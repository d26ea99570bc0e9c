use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use folio_core::catalog::{validate_new_review, NewReview, Review};

use crate::{
    handlers::{AppError, PageQuery},
    state::AppState,
};

/// List a book's reviews, newest first (GET /books/{book_id}/reviews).
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<Review>>, AppError> {
    let reviews = state.reviews.list_reviews(book_id, query.into()).await?;
    Ok(Json(reviews))
}

/// Create a review under a book (POST /books/{book_id}/reviews).
pub async fn create_review(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
    Json(payload): Json<NewReview>,
) -> Result<impl IntoResponse, AppError> {
    validate_new_review(&payload)?;

    let review = state.reviews.create_review(book_id, payload).await?;

    tracing::info!(book_id, review_id = review.id, "Created new review");

    Ok((StatusCode::CREATED, Json(review)))
}
