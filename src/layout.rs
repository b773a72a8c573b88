//! Layout module for tracking UI component regions
//!
//! This module provides region tracking for position-aware mouse interactions,
//! plus the breakpoint that switches the catalog between grid and strip.
//! `LayoutRegions` records where components were rendered, and `region_at()`
//! determines which component is at a given screen position.

mod layout_mode;
mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_mode::LayoutMode;
pub use layout_regions::{LayoutRegions, Region};


#[cfg(test)]
#[path = "layout/layout_hit_test_tests.rs"]
mod layout_hit_test_tests;
