use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publication_date: NaiveDate,
}

impl Book {
    pub fn new(
        id: u32,
        title: &str,
        author: &str,
        genre: &str,
        publication_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            publication_date,
        }
    }
}
