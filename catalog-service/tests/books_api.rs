use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use catalog_service::models::catalog::{builtin_books, Catalog};
use catalog_service::routes::router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn app_with(catalog: Catalog) -> Router {
    router(Arc::new(catalog), &["http://localhost:3000".to_string()])
}

fn app() -> Router {
    app_with(Catalog::new(builtin_books()).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn titles(body: &Value) -> Vec<String> {
    body["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn returns_first_page_by_default() {
    let (status, body) = get_json(app(), "/api/books").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalItems"], 20);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["currentPage"], 1);
    assert_eq!(body["pageSize"], 10);
    assert_eq!(body["books"].as_array().unwrap().len(), 10);
    assert_eq!(titles(&body)[0], "1984");
}

#[tokio::test]
async fn filters_by_title() {
    let (status, body) = get_json(app(), "/api/books?title=atomic").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Atomic Habits"]);
    assert_eq!(body["books"][0]["publicationDate"], "2018-10-16");
}

#[tokio::test]
async fn combines_filters() {
    let (_, body) = get_json(app(), "/api/books?author=tolkien&genre=FANTASY").await;

    assert_eq!(body["totalItems"], 2);
    assert_eq!(titles(&body), vec!["The Hobbit", "The Lord of the Rings"]);
}

#[tokio::test]
async fn paginates() {
    let (status, body) = get_json(app(), "/api/books?page=2&pageSize=5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentPage"], 2);
    assert_eq!(body["totalPages"], 4);
    assert_eq!(body["books"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn sorts_by_author_descending() {
    let (status, body) = get_json(app(), "/api/books?sortBy=author&sortOrder=desc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["books"][0]["author"], "Yuval Noah Harari");
}

#[tokio::test]
async fn sorts_by_publication_date() {
    let (_, body) = get_json(app(), "/api/books?sortBy=publicationDate&pageSize=3").await;

    assert_eq!(
        titles(&body),
        vec!["The Great Gatsby", "The Hobbit", "Animal Farm"]
    );
}

#[tokio::test]
async fn invalid_sort_still_returns_ok() {
    let (status, body) = get_json(app(), "/api/books?sortBy=invalidField&sortOrder=upward").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["books"].is_array());
    assert_eq!(titles(&body)[0], "1984");
}

#[tokio::test]
async fn invalid_pagination_falls_back() {
    let (status, body) = get_json(app(), "/api/books?page=-1&pageSize=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentPage"], 1);
    assert_eq!(body["pageSize"], 10);

    let (_, body) = get_json(app(), "/api/books?pageSize=1000").await;
    assert_eq!(body["pageSize"], 100);
    assert_eq!(body["books"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn page_past_end_is_empty() {
    let (status, body) = get_json(app(), "/api/books?page=9").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalItems"], 20);
    assert_eq!(body["currentPage"], 9);
    assert!(body["books"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn empty_catalog() {
    let app = app_with(Catalog::new(Vec::new()).unwrap());
    let (status, body) = get_json(app, "/api/books?title=anything").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalItems"], 0);
    assert_eq!(body["totalPages"], 0);
    assert!(body["books"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn health_check_reports_running() {
    let (status, body) = get_json(app(), "/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "catalog-service");
    assert_eq!(body["status"], "running");
}

#[tokio::test]
async fn allows_configured_origin() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/books")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn omits_cors_header_for_unknown_origin() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/books")
                .header(header::ORIGIN, "http://evil.test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
