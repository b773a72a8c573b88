//! Pagination module
//!
//! Page slicing over the fetched list, the page cursor with its memoized range,
//! and the "Page X of Y" controls.

mod page_state;
mod paginate;
pub mod pagination_render;

pub use page_state::{PageCache, PageState};
pub use paginate::{page_count, page_range, paginate};
pub use pagination_render::PaginationButtons;
