use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::catalog::CatalogStatus;
use crate::layout::LayoutMode;
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.status() != CatalogStatus::Ready {
        return hints!["r" => "Refresh", "q" => "Quit"];
    }

    match app.layout_mode {
        LayoutMode::Wide if app.page.has_multiple_pages(app.catalog.len()) => {
            hints!["←↑↓→" => "Move", "Enter" => "Select", "n/p" => "Page", "c" => "Confirm", "r" => "Refresh", "q" => "Quit"]
        }
        LayoutMode::Wide => {
            hints!["←↑↓→" => "Move", "Enter" => "Select", "c" => "Confirm", "r" => "Refresh", "q" => "Quit"]
        }
        LayoutMode::Narrow => {
            hints!["←→" => "Move", "Home/End" => "Jump", "Enter" => "Select", "c" => "Confirm", "r" => "Refresh", "q" => "Quit"]
        }
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_context_hints(app);
    let spans = build_styled_spans(&hints);
    let help = Paragraph::new(Line::from(spans));
    frame.render_widget(help, area);
}

#[cfg(test)]
#[path = "help_line_render_tests.rs"]
mod help_line_render_tests;
