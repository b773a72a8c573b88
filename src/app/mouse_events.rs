//! Mouse event dispatcher
//!
//! Routes mouse events to appropriate handlers based on position.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use crate::layout::{Region, region_at};

/// Columns the strip moves per wheel notch
const WHEEL_SCROLL_COLUMNS: i32 = 4;

/// Handle mouse events by routing to appropriate handlers
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let region = region_at(&app.layout_regions, mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, region),
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            handle_wheel(app, region, WHEEL_SCROLL_COLUMNS);
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
            handle_wheel(app, region, -WHEEL_SCROLL_COLUMNS);
        }
        _ => {}
    }
}

fn handle_click(app: &mut App, region: Option<Region>) {
    match region {
        Some(Region::Card(index)) => {
            app.focused = Some(index);
            app.select_index(index);
        }
        Some(Region::PagePrev) => {
            app.prev_page();
        }
        Some(Region::PageNext) => {
            app.next_page();
        }
        Some(Region::Strip) | Some(Region::DetailPanel) | None => {}
    }
}

fn handle_wheel(app: &mut App, region: Option<Region>, columns: i32) {
    let over_strip = app.strip.is_some()
        && matches!(region, Some(Region::Strip) | Some(Region::Card(_)));
    if over_strip {
        app.scroll_strip(columns);
    }
}

#[cfg(test)]
#[path = "mouse_events_tests.rs"]
mod mouse_events_tests;
