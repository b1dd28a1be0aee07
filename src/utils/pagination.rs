// src/utils/pagination.rs

/// Reads the `page` query value; absent or non-integer values mean page 1.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|p| p.trim().parse().ok()).unwrap_or(1)
}

/// Picks the first `page` among raw query pairs; later repeats are ignored.
pub fn page_param(pairs: &[(String, String)]) -> i64 {
    parse_page(
        pairs
            .iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.as_str()),
    )
}

/// Returns the 1-based `page` of `items`, `per_page` items wide.
///
/// The window is `[(page - 1) * per_page, (page - 1) * per_page + per_page)`.
/// Pages below 1 and pages past the end are empty.
pub fn paginate<T>(items: Vec<T>, page: i64, per_page: usize) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(per_page))
        .unwrap_or(usize::MAX);

    items.into_iter().skip(start).take(per_page).collect()
}
