use std::num::NonZeroUsize;
use std::ops::Range;

use super::paginate::{page_count, page_range};

/// Current page over the catalog (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page: usize,
    page_size: NonZeroUsize,
}

impl PageState {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self { page: 1, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Jump to a page without bounds checks beyond the 1-based floor
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn page_count(&self, total: usize) -> usize {
        page_count(total, self.page_size())
    }

    /// Whether the pagination controls are needed at all
    pub fn has_multiple_pages(&self, total: usize) -> bool {
        total > self.page_size()
    }

    pub fn can_go_next(&self, total: usize) -> bool {
        self.page < self.page_count(total)
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn next_page(&mut self, total: usize) -> bool {
        if self.can_go_next(total) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.can_go_prev() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Pull the page back into `[1, max(1, page_count)]` after the list shrank
    pub fn clamp_to(&mut self, total: usize) -> bool {
        let last = self.page_count(total).max(1);
        if self.page > last {
            self.page = last;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PageKey {
    revision: u64,
    len: usize,
    page: usize,
    page_size: usize,
}

/// Remembers the last computed page range so redraws with unchanged inputs skip the arithmetic
#[derive(Debug, Default)]
pub struct PageCache {
    cached: Option<(PageKey, Range<usize>)>,
    recomputations: usize,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Range of the current page for a list identified by `revision`
    pub fn range(&mut self, revision: u64, len: usize, page: &PageState) -> Range<usize> {
        let key = PageKey {
            revision,
            len,
            page: page.page(),
            page_size: page.page_size(),
        };

        if let Some((cached_key, range)) = &self.cached
            && *cached_key == key
        {
            return range.clone();
        }

        let range = page_range(len, key.page, key.page_size);
        self.recomputations += 1;
        self.cached = Some((key, range.clone()));
        range
    }

    /// Number of cache misses so far
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}
