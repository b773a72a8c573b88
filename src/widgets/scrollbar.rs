//! Horizontal scrollbar for the strip layout

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::theme;

const THUMB: &str = "█";
const TRACK: &str = "─";

/// Render a horizontal scrollbar along the bottom row of `area`
///
/// Nothing is drawn when the content fits the viewport.
pub fn render_horizontal_scrollbar(
    frame: &mut Frame,
    area: Rect,
    total: usize,
    viewport: usize,
    offset: usize,
) {
    if total <= viewport || viewport == 0 {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::HorizontalBottom)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_symbol(THUMB)
        .track_symbol(Some(TRACK))
        .thumb_style(Style::default().fg(theme::scrollbar::THUMB))
        .track_style(Style::default().fg(theme::scrollbar::TRACK));

    // Ratatui positions the thumb over content_length - 1 steps, so passing
    // max_scroll + 1 lets the thumb reach the end at max scroll.
    let max_scroll = total.saturating_sub(viewport);
    let mut state = ScrollbarState::new(max_scroll + 1)
        .position(offset.min(max_scroll))
        .viewport_content_length(viewport);

    frame.render_stateful_widget(scrollbar, area, &mut state);
}

#[cfg(test)]
#[path = "scrollbar_tests.rs"]
mod scrollbar_tests;
