mod app_events;
mod app_render;
mod app_state;
mod mouse_events;


// Re-export public types
pub use app_state::{App, Direction, OutputMode};
