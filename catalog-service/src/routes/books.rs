use crate::models::catalog::Catalog;
use crate::models::responses::BooksResponse;
use crate::services::query::execute;
use crate::services::request::normalize_params;
use axum::{
    extract::{Query, State},
    response::Json,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

pub type SharedCatalog = Arc<Catalog>;

/// `GET /api/books`. Unknown or malformed parameters fall back to defaults, so this always answers 200.
pub async fn list_books(
    Query(params): Query<HashMap<String, String>>,
    State(catalog): State<SharedCatalog>,
) -> Json<BooksResponse> {
    let query = normalize_params(&params);
    info!("Book query: {:?}", query);

    let page = execute(catalog.books(), &query);
    debug!(
        "Matched {} books, returning {} on page {}/{}",
        page.total_items,
        page.items.len(),
        page.current_page,
        page.total_pages
    );

    Json(BooksResponse::from(page))
}
