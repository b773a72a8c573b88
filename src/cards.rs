//! Cards module
//!
//! Rendering for the individual skip cards and the detail panel that
//! describes the selected skip.

pub mod detail_render;
pub mod skip_card_render;

pub use skip_card_render::CardState;
