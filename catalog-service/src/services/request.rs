use crate::models::query::{
    BookFilters, QueryDescriptor, SortField, SortOrder, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE,
};
use std::collections::HashMap;

/// Builds a query from raw query-string parameters.
///
/// Bad values fall back to their defaults instead of failing the request.
pub fn normalize_params(params: &HashMap<String, String>) -> QueryDescriptor {
    let page = param(params, "page")
        .and_then(parse_positive)
        .unwrap_or(DEFAULT_PAGE);
    let page_size = param(params, "pageSize")
        .and_then(parse_positive)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);

    QueryDescriptor {
        filters: BookFilters {
            title: param(params, "title").map(str::to_string),
            author: param(params, "author").map(str::to_string),
            genre: param(params, "genre").map(str::to_string),
        },
        sort_by: param(params, "sortBy")
            .and_then(SortField::from_param)
            .unwrap_or_default(),
        sort_order: param(params, "sortOrder")
            .and_then(SortOrder::from_param)
            .unwrap_or_default(),
        page,
        page_size,
    }
}

fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str)
}

/// Reads a leading base-10 integer the way browsers' `parseInt` does: leading
/// whitespace and an optional sign, then as many digits as follow ("12abc" is 12).
/// Returns `None` unless the result is at least 1. Oversized values saturate.
fn parse_positive(raw: &str) -> Option<usize> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let value = digits.bytes().fold(0usize, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(usize::from(digit - b'0'))
    });

    if negative || value == 0 {
        None
    } else {
        Some(value)
    }
}
