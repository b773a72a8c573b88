//! skip-picker library - Interactive skip size catalog
//!
//! This library exposes the core functionality of skip-picker for the binary and for testing.

pub mod app;
pub mod cards;
pub mod catalog;
pub mod config;
pub mod edge_mask;
pub mod error;
pub mod help;
pub mod layout;
pub mod listener;
pub mod notification;
pub mod pagination;
pub mod scroll;
pub mod selection;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::{App, OutputMode};
pub use catalog::{FetchSource, Skip};
pub use config::Config;
pub use error::SkipError;
