use crate::models::book::Book;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error reading catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate book id {0}")]
    DuplicateId(u32),
    #[error("Book id must be positive")]
    InvalidId,
    #[error("Book {id} has an empty {field}")]
    EmptyField { id: u32, field: &'static str },
}

/// Supplies the ordered book list once, at startup.
#[async_trait]
pub trait CatalogSource {
    async fn load_books(&self) -> Result<Vec<Book>, CatalogError>;
    fn describe(&self) -> String;
}

/// Read-only book list shared by every request.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(books.len());

        for book in &books {
            if book.id == 0 {
                return Err(CatalogError::InvalidId);
            }
            if !seen.insert(book.id) {
                return Err(CatalogError::DuplicateId(book.id));
            }
            for (field, value) in [
                ("title", &book.title),
                ("author", &book.author),
                ("genre", &book.genre),
            ] {
                if value.trim().is_empty() {
                    return Err(CatalogError::EmptyField { id: book.id, field });
                }
            }
        }

        Ok(Self { books })
    }

    pub async fn load(source: &(dyn CatalogSource + Send + Sync)) -> Result<Self, CatalogError> {
        let books = source.load_books().await?;
        let catalog = Self::new(books)?;
        info!(
            "Loaded {} books from {}",
            catalog.len(),
            source.describe()
        );
        Ok(catalog)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// The sample list the service ships with.
pub struct BuiltinCatalog;

#[async_trait]
impl CatalogSource for BuiltinCatalog {
    async fn load_books(&self) -> Result<Vec<Book>, CatalogError> {
        Ok(builtin_books())
    }

    fn describe(&self) -> String {
        "built-in sample catalog".to_string()
    }
}

/// Loads a JSON array of books, e.g.
/// `[{"id":1,"title":"...","author":"...","genre":"...","publicationDate":"2018-10-16"}]`.
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load_books(&self) -> Result<Vec<Book>, CatalogError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

const BUILTIN_BOOKS: [(u32, &str, &str, &str, (i32, u32, u32)); 20] = [
    (1, "Atomic Habits", "James Clear", "Self-Help", (2018, 10, 16)),
    (2, "1984", "George Orwell", "Fiction", (1949, 6, 8)),
    (3, "The Power of Habit", "Charles Duhigg", "Self-Help", (2012, 2, 28)),
    (4, "Animal Farm", "George Orwell", "Fiction", (1945, 8, 17)),
    (5, "To Kill a Mockingbird", "Harper Lee", "Classic", (1960, 7, 11)),
    (6, "The Great Gatsby", "F. Scott Fitzgerald", "Classic", (1925, 4, 10)),
    (7, "The Hobbit", "J.R.R. Tolkien", "Fantasy", (1937, 9, 21)),
    (8, "Harry Potter and the Sorcerer's Stone", "J.K. Rowling", "Fantasy", (1997, 6, 26)),
    (9, "Deep Work", "Cal Newport", "Productivity", (2016, 1, 5)),
    (10, "Rich Dad Poor Dad", "Robert Kiyosaki", "Personal Finance", (1997, 4, 1)),
    (11, "The Catcher in the Rye", "J.D. Salinger", "Classic", (1951, 7, 16)),
    (12, "Sapiens", "Yuval Noah Harari", "History", (2011, 1, 1)),
    (13, "The Lean Startup", "Eric Ries", "Business", (2011, 9, 13)),
    (14, "Thinking, Fast and Slow", "Daniel Kahneman", "Psychology", (2011, 10, 25)),
    (15, "The Alchemist", "Paulo Coelho", "Fiction", (1988, 1, 1)),
    (16, "The Lord of the Rings", "J.R.R. Tolkien", "Fantasy", (1954, 7, 29)),
    (17, "Educated", "Tara Westover", "Memoir", (2018, 2, 18)),
    (18, "The Subtle Art of Not Giving a F*ck", "Mark Manson", "Self-Help", (2016, 9, 13)),
    (19, "Becoming", "Michelle Obama", "Memoir", (2018, 11, 13)),
    (20, "Dune", "Frank Herbert", "Science Fiction", (1965, 8, 1)),
];

pub fn builtin_books() -> Vec<Book> {
    BUILTIN_BOOKS
        .iter()
        .filter_map(|&(id, title, author, genre, (year, month, day))| {
            NaiveDate::from_ymd_opt(year, month, day)
                .map(|date| Book::new(id, title, author, genre, date))
        })
        .collect()
}
