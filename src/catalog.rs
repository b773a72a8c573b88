//! Catalog module
//!
//! The skip record, the background fetcher that loads the list, and the state
//! that tracks what has been fetched so far.

mod catalog_state;
pub mod catalog_render;
pub mod fetcher;
mod skip;

pub use catalog_state::{CatalogState, CatalogStatus};
pub use fetcher::{FetchSource, SkipFetcher};
pub use skip::{Skip, format_currency};
