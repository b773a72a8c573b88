//! Small rendering helpers shared by several components

pub mod popup;
pub mod scrollbar;
