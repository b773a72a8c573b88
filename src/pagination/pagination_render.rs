//! Pagination controls: "◀ Page X of Y ▶", right aligned on a single row

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme;

const PREV_LABEL: &str = " ◀ ";
const NEXT_LABEL: &str = " ▶ ";
const BUTTON_WIDTH: u16 = 3;

/// Screen rectangles of the two buttons, for click hit testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationButtons {
    pub prev: Rect,
    pub next: Rect,
}

pub fn page_label(page: usize, page_count: usize) -> String {
    format!("Page {} of {}", page, page_count)
}

/// Render the controls; returns the button rectangles
pub fn render_controls(
    frame: &mut Frame,
    area: Rect,
    page: usize,
    page_count: usize,
) -> PaginationButtons {
    let label = page_label(page, page_count);
    let label_width = label.chars().count() as u16;
    let total_width = (BUTTON_WIDTH * 2 + label_width + 2).min(area.width);

    let x = area.x + area.width.saturating_sub(total_width);
    let row = Rect::new(x, area.y, total_width, 1.min(area.height));

    let prev_enabled = page > 1;
    let next_enabled = page < page_count;

    let button_style = |enabled: bool| {
        if enabled {
            theme::pagination::BUTTON
        } else {
            theme::pagination::BUTTON_DISABLED
        }
    };

    // Buttons keep their place at both ends; a narrow row squeezes the label
    let prev = Rect::new(row.x, row.y, BUTTON_WIDTH.min(row.width), row.height);
    let next_width = BUTTON_WIDTH.min(row.width - prev.width);
    let next = Rect::new(row.right() - next_width, row.y, next_width, row.height);
    let label_area = Rect::new(
        prev.right(),
        row.y,
        row.width - prev.width - next_width,
        row.height,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(PREV_LABEL, button_style(prev_enabled))),
        prev,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            label,
            Style::default().fg(theme::pagination::LABEL),
        )))
        .alignment(Alignment::Center),
        label_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(NEXT_LABEL, button_style(next_enabled))),
        next,
    );

    PaginationButtons { prev, next }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(page: usize, page_count: usize, width: u16) -> (String, PaginationButtons) {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut buttons = None;
        terminal
            .draw(|f| buttons = Some(render_controls(f, f.area(), page, page_count)))
            .unwrap();
        (terminal.backend().to_string(), buttons.unwrap())
    }

    #[test]
    fn test_page_label() {
        assert_eq!(page_label(2, 3), "Page 2 of 3");
    }

    #[test]
    fn test_controls_show_label_and_arrows() {
        let (output, _) = render_to_string(1, 3, 40);
        assert!(output.contains("Page 1 of 3"));
        assert!(output.contains('◀'));
        assert!(output.contains('▶'));
    }

    #[test]
    fn test_controls_are_right_aligned() {
        let (_, buttons) = render_to_string(1, 3, 40);
        // " ◀ " + " " + "Page 1 of 3" + " " + " ▶ " = 19 columns
        assert_eq!(buttons.prev, Rect::new(21, 0, 3, 1));
        assert_eq!(buttons.next, Rect::new(37, 0, 3, 1));
    }

    #[test]
    fn test_squeezed_controls_keep_buttons_inside_row() {
        let (_, buttons) = render_to_string(2, 3, 12);
        assert_eq!(buttons.prev, Rect::new(0, 0, 3, 1));
        assert_eq!(buttons.next, Rect::new(9, 0, 3, 1));

        let backend = TestBackend::new(12, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                render_controls(f, f.area(), 2, 3);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(1, 0)].symbol(), "◀");
        assert_eq!(buffer[(10, 0)].symbol(), "▶");
    }

    #[test]
    fn test_tiny_row_buttons_do_not_overlap() {
        let (_, buttons) = render_to_string(2, 3, 4);
        assert_eq!(buttons.prev, Rect::new(0, 0, 3, 1));
        assert_eq!(buttons.next, Rect::new(3, 0, 1, 1));
        assert!(buttons.next.right() <= 4);
    }

    #[test]
    fn test_disabled_buttons_use_dim_style() {
        let backend = TestBackend::new(40, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                render_controls(f, f.area(), 1, 3);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let prev_cell = &buffer[(22, 0)];
        let next_cell = &buffer[(38, 0)];
        assert_eq!(prev_cell.bg, theme::palette::BG_SURFACE);
        assert_eq!(next_cell.bg, theme::palette::PRIMARY);
    }
}
