//! Fixed-size, 1-based page slicing over an id-ordered result set.

use std::ops::Range;

use crate::names;

/// One page of a larger result set.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Size of the whole result set, not of this page.
    pub total: usize,
}

/// Index range covered by `page`, or `None` when the page number is below 1
/// or the offset does not fit in memory.
pub fn page_range(page: i64, per_page: usize) -> Option<Range<usize>> {
    let page = usize::try_from(page).ok()?.checked_sub(1)?;
    let start = page.checked_mul(per_page)?;
    let end = start.checked_add(per_page)?;
    Some(start..end)
}

/// Slices `items` down to the requested page of `QUESTIONS_PER_PAGE` entries.
pub fn paginate<T>(items: Vec<T>, page: i64) -> Page<T> {
    paginate_by(items, page, names::QUESTIONS_PER_PAGE)
}

pub fn paginate_by<T>(items: Vec<T>, page: i64, per_page: usize) -> Page<T> {
    let total = items.len();
    let items = match page_range(page, per_page) {
        Some(range) if range.start < total => items
            .into_iter()
            .skip(range.start)
            .take(range.end - range.start)
            .collect(),
        _ => Vec::new(),
    };

    Page { items, total }
}
