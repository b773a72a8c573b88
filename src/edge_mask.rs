//! Edge mask module
//!
//! Tracks whether a scroll strip has more content past its left or right edge
//! and draws the faded overlays that signal it.

mod edge_mask_detector;
pub mod edge_mask_render;

pub use edge_mask_detector::{EdgeMaskDetector, EdgeMasks};
