//! Tests for mouse_events

use super::*;
use crate::test_utils::test_helpers::{app_with_skips, render_app};
use ratatui::crossterm::event::KeyModifiers;
use ratatui::layout::Rect;

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

fn click(app: &mut App, rect: Rect) {
    handle_mouse_event(
        app,
        mouse(MouseEventKind::Down(MouseButton::Left), rect.x + 1, rect.y + 1),
    );
}

#[test]
fn test_click_card_selects_it() {
    let mut app = app_with_skips(20);
    render_app(&mut app, 140, 30);

    let rect = app.layout_regions.card_rect(4).unwrap();
    click(&mut app, rect);

    assert!(app.selection.is_selected(5));
    assert_eq!(app.focused, Some(4));
}

#[test]
fn test_click_next_and_prev_buttons() {
    let mut app = app_with_skips(20);
    render_app(&mut app, 140, 30);

    let next = app.layout_regions.page_next.unwrap();
    handle_mouse_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), next.x, next.y));
    assert_eq!(app.page.page(), 2);

    render_app(&mut app, 140, 30);
    let prev = app.layout_regions.page_prev.unwrap();
    handle_mouse_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), prev.x, prev.y));
    assert_eq!(app.page.page(), 1);
}

#[test]
fn test_click_outside_regions_is_ignored() {
    let mut app = app_with_skips(20);
    render_app(&mut app, 140, 30);

    handle_mouse_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));

    assert!(app.selection.selected().is_none());
    assert_eq!(app.page.page(), 1);
}

#[test]
fn test_wheel_scrolls_strip() {
    let mut app = app_with_skips(20);
    render_app(&mut app, 80, 30);
    let strip = app.layout_regions.strip.unwrap();

    handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollDown, strip.x + 19, strip.y + 1));
    assert_eq!(app.strip.as_ref().map(|s| s.offset()), Some(4));

    handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollUp, strip.x + 19, strip.y + 1));
    assert_eq!(app.strip.as_ref().map(|s| s.offset()), Some(0));
}

#[test]
fn test_wheel_outside_strip_is_ignored() {
    let mut app = app_with_skips(20);
    render_app(&mut app, 80, 30);

    handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollDown, 0, 0));

    assert_eq!(app.strip.as_ref().map(|s| s.offset()), Some(0));
}

#[test]
fn test_click_visible_strip_card() {
    let mut app = app_with_skips(20);
    render_app(&mut app, 80, 30);

    let rect = app.layout_regions.card_rect(1).unwrap();
    click(&mut app, rect);

    assert!(app.selection.is_selected(2));
}
