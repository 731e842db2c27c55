use crate::models::book::Book;
use crate::services::query::ResultPage;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooksResponse {
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub books: Vec<Book>,
}

impl From<ResultPage> for BooksResponse {
    fn from(page: ResultPage) -> Self {
        Self {
            total_items: page.total_items,
            total_pages: page.total_pages,
            current_page: page.current_page,
            page_size: page.page_size,
            books: page.items,
        }
    }
}
