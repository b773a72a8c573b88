//! Page slicing arithmetic
//!
//! Pages are 1-indexed. None of these functions fail: an out-of-range page
//! yields an empty slice.

use std::ops::Range;

/// Index range of `page` over a list of `len` items
pub fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= len {
        return len..len;
    }
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// The items shown on `page`
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_range(items.len(), page, page_size)]
}

/// Number of pages needed for `len` items
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

#[cfg(test)]
#[path = "paginate_tests.rs"]
mod paginate_tests;
