pub mod books;
pub mod health;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use books::{list_books, SharedCatalog};
use health::health_check;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Read-only CORS for the configured origins; an empty list allows any origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods([Method::GET]);

    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}

pub fn router(catalog: SharedCatalog, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/status", get(health_check))
        .route("/api/books", get(list_books))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}
