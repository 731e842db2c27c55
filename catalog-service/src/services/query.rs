use crate::models::book::Book;
use crate::models::query::{BookFilters, QueryDescriptor, SortField, SortOrder};

/// One page of query results plus the counts the client needs to page through the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage {
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub items: Vec<Book>,
}

/// Runs filter, sort and paginate, in that order, over the catalog.
///
/// Never fails: an empty catalog or a page past the end yields an empty `items`.
pub fn execute(catalog: &[Book], query: &QueryDescriptor) -> ResultPage {
    let mut matched = filter_books(catalog, &query.filters);
    sort_books(&mut matched, query.sort_by, query.sort_order);
    paginate(matched, query.page, query.page_size)
}

pub fn filter_books<'a>(catalog: &'a [Book], filters: &BookFilters) -> Vec<&'a Book> {
    catalog.iter().filter(|book| filters.matches(book)).collect()
}

/// Stable: books that compare equal keep their catalog order in both directions.
pub fn sort_books(books: &mut [&Book], sort_by: SortField, sort_order: SortOrder) {
    books.sort_by(|a, b| sort_order.apply(sort_by.compare(a, b)));
}

pub fn paginate(books: Vec<&Book>, page: usize, page_size: usize) -> ResultPage {
    let total_items = books.len();
    let page_size = page_size.max(1);
    let page = page.max(1);

    let start = (page - 1).saturating_mul(page_size);
    let items = books
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    ResultPage {
        total_items,
        total_pages: total_items.div_ceil(page_size),
        current_page: page,
        page_size,
        items,
    }
}
