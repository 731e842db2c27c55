use crate::models::book::Book;
use std::cmp::Ordering;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// Book field a query can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Title,
    Author,
    Genre,
    PublicationDate,
}

impl SortField {
    /// Matches the query-string spelling exactly (`publicationDate`, not `publication_date`).
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "title" => Some(Self::Title),
            "author" => Some(Self::Author),
            "genre" => Some(Self::Genre),
            "publicationDate" => Some(Self::PublicationDate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Genre => "genre",
            Self::PublicationDate => "publicationDate",
        }
    }

    /// Ascending comparison of two books on this field.
    ///
    /// Text fields compare case-insensitively; dates compare chronologically.
    pub fn compare(&self, a: &Book, b: &Book) -> Ordering {
        match self {
            Self::Title => compare_folded(&a.title, &b.title),
            Self::Author => compare_folded(&a.author, &b.author),
            Self::Genre => compare_folded(&a.genre, &b.genre),
            Self::PublicationDate => a.publication_date.cmp(&b.publication_date),
        }
    }
}

fn compare_folded(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn from_param(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    /// Applies this order to an ascending comparison result.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Substring patterns, one per filterable field. `None` and empty strings match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilters {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
}

impl BookFilters {
    pub fn matches(&self, book: &Book) -> bool {
        contains_folded(&book.title, self.title.as_deref())
            && contains_folded(&book.author, self.author.as_deref())
            && contains_folded(&book.genre, self.genre.as_deref())
    }
}

fn contains_folded(field: &str, pattern: Option<&str>) -> bool {
    match pattern {
        Some(pattern) if !pattern.is_empty() => field
            .to_lowercase()
            .contains(&pattern.to_lowercase()),
        _ => true,
    }
}

/// A fully validated query. Built by [`crate::services::request::normalize_params`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub filters: BookFilters,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub page: usize,
    pub page_size: usize,
}

impl Default for QueryDescriptor {
    fn default() -> Self {
        Self {
            filters: BookFilters::default(),
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
