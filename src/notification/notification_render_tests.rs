//! Tests for notification_render

use super::*;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render(notification: &mut NotificationState, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| render_notification(f, notification))
        .unwrap();
    terminal
}

#[test]
fn test_notification_in_top_right_corner() {
    let mut notification = NotificationState::new();
    notification.show("Loaded 20 skips");

    let terminal = render(&mut notification, 60, 10);
    let buffer = terminal.backend().buffer();

    // 15 chars + 4 wide, one column margin from the right edge
    assert_eq!(buffer[(40, 1)].symbol(), "╭");
    assert_eq!(buffer[(58, 1)].symbol(), "╮");
    let row: String = (40..59).map(|x| buffer[(x, 2)].symbol().to_string()).collect();
    assert_eq!(row, "│ Loaded 20 skips │");
}

#[test]
fn test_no_active_notification_renders_nothing() {
    let mut notification = NotificationState::new();

    let terminal = render(&mut notification, 60, 10);
    assert!(!terminal.backend().to_string().contains('╭'));
}

#[test]
fn test_warning_uses_warning_colors() {
    let mut notification = NotificationState::new();
    notification.show_warning("Invalid config");

    let terminal = render(&mut notification, 60, 10);
    let buffer = terminal.backend().buffer();

    assert_eq!(buffer[(45, 2)].bg, crate::theme::notification::WARNING.bg);
}

#[test]
fn test_too_small_frame_renders_nothing() {
    let mut notification = NotificationState::new();
    notification.show("Loaded 20 skips");

    let terminal = render(&mut notification, 60, 3);
    assert!(!terminal.backend().to_string().contains("Loaded"));
}
