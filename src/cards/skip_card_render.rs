//! A single skip card: size and price, highlighted when selected or focused
//!
//! Cards render straight into a `Buffer` so the strip layout can draw them
//! off-screen and copy the visible window.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget},
};

use crate::catalog::Skip;
use crate::theme;

const SELECTED_MARKER: &str = " ● ";

/// Smallest card that still fits its border
const MIN_CARD_WIDTH: u16 = 3;
const MIN_CARD_HEIGHT: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardState {
    pub selected: bool,
    pub focused: bool,
}

pub fn render_card(buf: &mut Buffer, area: Rect, skip: &Skip, state: CardState) {
    if area.width < MIN_CARD_WIDTH || area.height < MIN_CARD_HEIGHT {
        return;
    }

    let (border, background) = if state.selected {
        (theme::card::BORDER_SELECTED, theme::card::BACKGROUND_SELECTED)
    } else if state.focused {
        (theme::card::BORDER_FOCUSED, theme::card::BACKGROUND_FOCUSED)
    } else {
        (theme::card::BORDER, theme::card::BACKGROUND)
    };

    let inner_height = area.height.saturating_sub(2);
    let top_padding = inner_height.saturating_sub(2) / 2;

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(if state.focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(background))
        .padding(Padding::top(top_padding));

    if state.selected {
        block = block.title(Span::styled(
            SELECTED_MARKER,
            Style::default().fg(theme::card::SELECTED_MARKER),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(skip.size_label(), theme::card::SIZE)),
        Line::from(Span::styled(
            skip.price_label(),
            Style::default().fg(theme::card::PRICE),
        )),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
        .render(area, buf);
}
