//! Category filtering and the list selections used by listing pages.

use crate::domain::ContentRecord;

/// Wildcard category that disables filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Home page portfolio mix: per-category head counts, in display order.
pub const HOME_PORTFOLIO_QUOTAS: &[(&str, usize)] = &[
    ("web-design", 3),
    ("digital-marketing", 2),
    ("video-production", 1),
];

/// Ordered subsequence of `records` whose category equals `category` exactly.
/// The wildcard returns every record.
#[must_use]
pub fn filter_by_category<T: ContentRecord>(records: &[T], category: &str) -> Vec<T> {
    if category == ALL_CATEGORIES {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| record.category() == Some(category))
        .cloned()
        .collect()
}

/// Filter choices for a listing: the wildcard followed by every distinct
/// category in first-seen order.
#[must_use]
pub fn categories<T: ContentRecord>(records: &[T]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for category in records.iter().filter_map(T::category) {
        if !out.iter().any(|seen| seen == category) {
            out.push(category.to_string());
        }
    }
    out
}

#[must_use]
pub fn find_by_id<'a, T: ContentRecord>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|record| record.id() == id)
}

/// Up to `limit` records sharing the category of `id`, excluding `id` itself.
/// Empty when `id` is unknown or has no category.
#[must_use]
pub fn related<T: ContentRecord>(records: &[T], id: &str, limit: usize) -> Vec<T> {
    let Some(category) = find_by_id(records, id).and_then(T::category) else {
        return Vec::new();
    };
    records
        .iter()
        .filter(|record| record.id() != id && record.category() == Some(category))
        .take(limit)
        .cloned()
        .collect()
}

/// Take the first `n` records of each category in quota order.
#[must_use]
pub fn select_by_quota<T: ContentRecord>(records: &[T], quotas: &[(&str, usize)]) -> Vec<T> {
    quotas
        .iter()
        .flat_map(|(category, n)| {
            records
                .iter()
                .filter(move |record| record.category() == Some(*category))
                .take(*n)
        })
        .cloned()
        .collect()
}
