use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use crate::catalog::Skip;
use crate::theme;

const EMPTY_MESSAGE: &str = "Select a skip to see more details";
const FORBIDDEN_BADGE: &str = " ⚠ FORBIDDEN ";
const TICK: &str = "✔";
const CROSS: &str = "✘";

/// Render the detail panel for the selection, or the prompt when nothing is selected
pub fn render_detail(frame: &mut Frame, area: Rect, selected: Option<&Skip>) {
    match selected {
        Some(skip) => render_selected(frame, area, skip),
        None => render_placeholder(frame, area),
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::detail::BORDER))
        .padding(Padding::top(area.height.saturating_sub(3) / 2));

    let message = Paragraph::new(Line::from(Span::styled(
        EMPTY_MESSAGE,
        Style::default().fg(theme::detail::PLACEHOLDER),
    )))
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(message, area);
}

fn render_selected(frame: &mut Frame, area: Rect, skip: &Skip) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::detail::BORDER))
        .padding(Padding::horizontal(1));

    if skip.forbidden {
        block = block.title(
            Line::from(Span::styled(FORBIDDEN_BADGE, theme::detail::FORBIDDEN)).right_aligned(),
        );
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [heading, _, fields_top, _, fields_bottom, separator, badges] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    render_heading(frame, heading, skip);

    let hire_period = skip.hire_period_label();
    let vat = skip.vat_label();
    render_field_row(
        frame,
        fields_top,
        [
            ("HIRE PERIOD", hire_period.as_str()),
            ("VAT %", vat.as_str()),
            ("POSTCODE", skip.postcode_label()),
        ],
    );

    let transport = skip.transport_cost_label();
    let per_tonne = skip.per_tonne_cost_label();
    render_field_row(
        frame,
        fields_bottom,
        [
            ("AREA", skip.area_label()),
            ("TRANSPORT COST", transport.as_str()),
            ("PER TONNE COST", per_tonne.as_str()),
        ],
    );

    let rule = "─".repeat(separator.width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(rule, Style::default().fg(theme::detail::SEPARATOR))),
        separator,
    );

    let mut badge_spans = capability_badge(skip.allowed_on_road, skip.road_label());
    badge_spans.push(Span::raw("   "));
    badge_spans.extend(capability_badge(
        skip.allows_heavy_waste,
        skip.heavy_waste_label(),
    ));
    frame.render_widget(Paragraph::new(Line::from(badge_spans)), badges);
}

fn render_heading(frame: &mut Frame, area: Rect, skip: &Skip) {
    let price = format!(" {} ", skip.price_label());
    let price_width = price.chars().count() as u16;

    let [title_area, price_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(price_width)]).areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(skip.title(), theme::detail::TITLE)),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(price, theme::detail::PRICE_BADGE)),
        price_area,
    );
}

fn render_field_row(frame: &mut Frame, area: Rect, fields: [(&str, &str); 3]) {
    let columns = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    for ((label, value), column) in fields.into_iter().zip(columns.iter()) {
        let lines = vec![
            Line::from(Span::styled(label.to_string(), theme::detail::FIELD_LABEL)),
            Line::from(Span::styled(
                value.to_string(),
                Style::default().fg(theme::detail::FIELD_VALUE),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), *column);
    }
}

fn capability_badge(enabled: bool, label: &'static str) -> Vec<Span<'static>> {
    let (icon, color) = if enabled {
        (TICK, theme::detail::BADGE_YES)
    } else {
        (CROSS, theme::detail::BADGE_NO)
    };
    vec![
        Span::styled(icon, Style::default().fg(color)),
        Span::raw(" "),
        Span::styled(label, Style::default().fg(theme::detail::BADGE_TEXT)),
    ]
}
