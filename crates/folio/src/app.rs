use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        books::{create_book, list_books},
        health::health,
        reviews::{create_review, list_reviews},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/{book_id}/reviews",
            get(list_reviews).post(create_review),
        )
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(all(test, feature = "sqlite", feature = "memory"))]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn test_app() -> Router {
        create_app(AppState::ephemeral().await)
    }

    fn book_payload(title: &str, isbn: Option<&str>) -> String {
        serde_json::json!({
            "title": title,
            "author": "Frank Herbert",
            "isbn": isbn,
            "description": "Desert planet",
            "published_year": 1965,
        })
        .to_string()
    }

    async fn post_json(app: &Router, uri: &str, body: String) -> axum::response::Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn get_uri(app: &Router, uri: &str) -> axum::response::Response {
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app().await;

        let response = get_uri(&app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "folio");
    }

    #[tokio::test]
    async fn test_list_books_empty() {
        let app = test_app().await;

        let response = get_uri(&app, "/books").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_create_and_list_book() {
        let app = test_app().await;

        let response = post_json(&app, "/books", book_payload("Dune", Some("9780441172719"))).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let book = json_body(response).await;
        assert_eq!(book["title"], "Dune");
        assert_eq!(book["isbn"], "9780441172719");
        assert!(book["id"].as_i64().unwrap() > 0);

        let response = get_uri(&app, "/books").await;
        let books = json_body(response).await;
        assert_eq!(books.as_array().unwrap().len(), 1);
        assert_eq!(books[0]["title"], "Dune");
    }

    #[tokio::test]
    async fn test_duplicate_isbn_conflicts() {
        let app = test_app().await;

        let response = post_json(&app, "/books", book_payload("Dune", Some("9780441172719"))).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response =
            post_json(&app, "/books", book_payload("Dune again", Some("9780441172719"))).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_invalid_book_payload_is_unprocessable() {
        let app = test_app().await;

        let response = post_json(&app, "/books", book_payload("", None)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = post_json(&app, "/books", book_payload("Dune", Some("not-digits"))).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_reviews_require_existing_book() {
        let app = test_app().await;

        let response = get_uri(&app, "/books/999999/reviews").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let payload = serde_json::json!({
            "reviewer_name": "alice",
            "rating": 4.5,
            "comment": "great",
        })
        .to_string();
        let response = post_json(&app, "/books/999999/reviews", payload).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_and_list_reviews() {
        let app = test_app().await;

        let response = post_json(&app, "/books", book_payload("Dune", None)).await;
        let book = json_body(response).await;
        let book_id = book["id"].as_i64().unwrap();

        let payload = serde_json::json!({
            "reviewer_name": "alice",
            "rating": 4.5,
            "comment": "great",
        })
        .to_string();
        let response = post_json(&app, &format!("/books/{book_id}/reviews"), payload).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let review = json_body(response).await;
        assert_eq!(review["book_id"].as_i64().unwrap(), book_id);
        assert_eq!(review["reviewer_name"], "alice");

        let response = get_uri(&app, &format!("/books/{book_id}/reviews")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let reviews = json_body(response).await;
        assert_eq!(reviews.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_review_rating_out_of_range_is_unprocessable() {
        let app = test_app().await;

        let response = post_json(&app, "/books", book_payload("Dune", None)).await;
        let book = json_body(response).await;
        let book_id = book["id"].as_i64().unwrap();

        let payload = serde_json::json!({
            "reviewer_name": "alice",
            "rating": 5.5,
        })
        .to_string();
        let response = post_json(&app, &format!("/books/{book_id}/reviews"), payload).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_pagination_query_parameters() {
        let app = test_app().await;

        for i in 0..3 {
            let response = post_json(&app, "/books", book_payload(&format!("book {i}"), None)).await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = get_uri(&app, "/books?skip=1&limit=1").await;
        assert_eq!(response.status(), StatusCode::OK);
        let books = json_body(response).await;
        assert_eq!(books.as_array().unwrap().len(), 1);
    }
}
