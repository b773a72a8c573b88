//! Help line module
//!
//! The bottom status bar listing the keys that apply to the current screen.

pub mod help_line_render;
