//! Catalog area rendering
//!
//! The wide layout shows the current page as a grid with pagination controls
//! underneath. The narrow layout draws only the cards overlapping the scrolled
//! window, each through a card-sized scratch buffer so partially visible cards
//! are clipped, then overlays the edge masks.

use std::ops::Range;

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::CatalogStatus;
use crate::app::App;
use crate::cards::skip_card_render::{CardState, render_card};
use crate::edge_mask::edge_mask_render::render_masks;
use crate::pagination::pagination_render::render_controls;
use crate::scroll::ScrollStrip;
use crate::theme;
use crate::widgets::{popup, scrollbar};

pub const GRID_COLUMNS: usize = 3;
pub const CARD_GAP: u16 = 2;
pub const CARD_HEIGHT: u16 = 6;
pub const STRIP_CARD_WIDTH: u16 = 18;
/// Cards plus the scrollbar row
pub const STRIP_HEIGHT: u16 = CARD_HEIGHT + 1;

const LOADING_MESSAGE: &str = "Loading skips...";
const EMPTY_MESSAGE: &str = "No skips available";
const STATUS_BOX_WIDTH: u16 = 30;

/// Columns from the start of one strip card to the start of the next
const STRIP_CARD_PITCH: u32 = STRIP_CARD_WIDTH as u32 + CARD_GAP as u32;

/// Columns `start..end` covered by strip card `index`
pub fn strip_card_span(index: usize) -> (u32, u32) {
    let start = u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STRIP_CARD_PITCH);
    (start, start.saturating_add(u32::from(STRIP_CARD_WIDTH)))
}

/// Total strip width for `count` cards
pub fn strip_content_width(count: usize) -> u32 {
    match count {
        0 => 0,
        n => strip_card_span(n - 1).1,
    }
}

/// Indices of the strip cards overlapping columns `offset..offset + visible`
pub fn strip_cards_in_window(count: usize, offset: u32, visible: u32) -> Range<usize> {
    if count == 0 || visible == 0 {
        return 0..0;
    }
    let to_index =
        |column: u32| usize::try_from(column / STRIP_CARD_PITCH).unwrap_or(usize::MAX);
    let first = to_index(offset);
    let last = to_index(offset.saturating_add(visible) - 1);
    first.min(count)..last.saturating_add(1).min(count)
}

/// Wide layout: the current page as a grid
pub fn render_grid(app: &mut App, frame: &mut Frame, area: Rect) {
    if let Some(status) = status_message(app.status()) {
        render_status(frame, area, status);
        return;
    }

    let total = app.catalog.len();
    let show_controls = app.page.has_multiple_pages(total);
    let [cards_area, controls_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(if show_controls { 1 } else { 0 }),
    ])
    .areas(area);

    let range = app.visible_range();
    let rows = range.len().div_ceil(GRID_COLUMNS).max(1) as u16;
    let row_height = (cards_area.height / rows).min(CARD_HEIGHT);
    let gaps = CARD_GAP * (GRID_COLUMNS as u16 - 1);
    let column_width = cards_area.width.saturating_sub(gaps) / GRID_COLUMNS as u16;

    for (slot, index) in range.enumerate() {
        let column = (slot % GRID_COLUMNS) as u16;
        let row = (slot / GRID_COLUMNS) as u16;
        let rect = Rect::new(
            cards_area.x + column * (column_width + CARD_GAP),
            cards_area.y + row * row_height,
            column_width,
            row_height,
        );
        if rect.bottom() > cards_area.bottom() {
            break;
        }

        let skip = &app.catalog.skips()[index];
        let state = CardState {
            selected: app.selection.is_selected(skip.id),
            focused: app.focused == Some(index),
        };
        render_card(frame.buffer_mut(), rect, skip, state);
        app.layout_regions.push_card(index, rect);
    }

    if show_controls {
        let buttons = render_controls(
            frame,
            controls_area,
            app.page.page(),
            app.page.page_count(total),
        );
        app.layout_regions.page_prev = Some(buttons.prev);
        app.layout_regions.page_next = Some(buttons.next);
    }
}

/// Narrow layout: every card in one horizontally scrolling row
pub fn render_strip(app: &mut App, frame: &mut Frame, area: Rect) {
    if let Some(status) = status_message(app.status()) {
        app.release_strip();
        render_status(frame, area, status);
        return;
    }

    let [cards_area, scrollbar_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let count = app.catalog.len();
    let total = strip_content_width(count);
    let visible = u32::from(cards_area.width);

    let strip = app.strip.get_or_insert_with(ScrollStrip::new);
    strip.update_bounds(total, visible);
    let offset = strip.offset();

    app.edge_mask.observe(app.strip.as_mut(), &mut app.viewport);
    if let Some(strip) = app.strip.as_ref() {
        app.edge_mask.process(strip);
    }

    let card_area = Rect::new(0, 0, STRIP_CARD_WIDTH, cards_area.height);
    let mut card_buffer = Buffer::empty(card_area);
    for index in strip_cards_in_window(count, offset, visible) {
        let (start, end) = strip_card_span(index);
        let Some(on_screen) = window_rect(start, end, offset, cards_area) else {
            continue;
        };

        let skip = &app.catalog.skips()[index];
        let state = CardState {
            selected: app.selection.is_selected(skip.id),
            focused: app.focused == Some(index),
        };
        card_buffer.reset();
        render_card(&mut card_buffer, card_area, skip, state);

        // Columns of the card cut off by the left edge of the window
        let skipped = u16::try_from(offset.saturating_sub(start)).unwrap_or(u16::MAX);
        copy_columns(&card_buffer, frame.buffer_mut(), skipped, on_screen);
        app.layout_regions.push_card(index, on_screen);
    }

    render_masks(frame, cards_area, app.edge_mask.masks());
    scrollbar::render_horizontal_scrollbar(
        frame,
        scrollbar_area,
        usize::try_from(total).unwrap_or(usize::MAX),
        usize::from(cards_area.width),
        usize::try_from(offset).unwrap_or(usize::MAX),
    );

    app.layout_regions.strip = Some(area);
}

/// On-screen part of content columns `start..end`, if any
fn window_rect(start: u32, end: u32, offset: u32, window: Rect) -> Option<Rect> {
    let left = start.max(offset);
    let right = end.min(offset.saturating_add(u32::from(window.width)));
    if left >= right {
        return None;
    }
    // Both differences are bounded by the window width
    let x = u16::try_from(left - offset).ok()?;
    let width = u16::try_from(right - left).ok()?;
    Some(Rect::new(window.x + x, window.y, width, window.height))
}

/// Copy `target.width` columns of `source`, starting at column `skip`, onto `target`
fn copy_columns(source: &Buffer, dest: &mut Buffer, skip: u16, target: Rect) {
    let rows = target.height.min(source.area.height);
    for col in 0..target.width {
        let source_x = skip.saturating_add(col);
        if source_x >= source.area.width {
            break;
        }
        for row in 0..rows {
            dest[(target.x + col, target.y + row)] = source[(source_x, row)].clone();
        }
    }
}

fn status_message(status: CatalogStatus) -> Option<&'static str> {
    match status {
        CatalogStatus::Loading => Some(LOADING_MESSAGE),
        CatalogStatus::Empty => Some(EMPTY_MESSAGE),
        CatalogStatus::Ready => None,
    }
}

fn render_status(frame: &mut Frame, area: Rect, message: &str) {
    let rect = popup::centered_popup(area, STATUS_BOX_WIDTH, 3);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::status::BORDER));
    let text = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(theme::status::MESSAGE),
    )))
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(text, rect);
}

#[cfg(test)]
#[path = "catalog_render_tests.rs"]
mod catalog_render_tests;
