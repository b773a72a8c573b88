//! Scrollable elements and the viewport that encloses them

mod scroll_strip;
mod viewport;

pub use scroll_strip::{ElementId, ScrollMetrics, ScrollStrip};
pub use viewport::Viewport;
