use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::cards::detail_render::render_detail;
use crate::catalog::catalog_render::{self, STRIP_HEIGHT};
use crate::layout::LayoutMode;
use crate::notification::render_notification;
use crate::theme;

const TITLE: &str = "Choose Your Skip Size";
const SUBTITLE: &str = "Select the skip size that best suits your needs";

/// Bordered detail panel: heading, two field rows, rule and badges
const DETAIL_HEIGHT: u16 = 11;
const DETAIL_WIDTH_PERCENT: u16 = 38;
const COLUMN_SPACING: u16 = 2;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let area = frame.area();
        self.set_viewport_size(area.width, area.height);

        let [header_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        render_header(frame, header_area);

        match self.layout_mode {
            LayoutMode::Wide => self.render_wide(frame, body_area),
            LayoutMode::Narrow => self.render_narrow(frame, body_area),
        }

        crate::help::help_line_render::render_line(self, frame, help_area);

        render_notification(frame, &mut self.notification);
    }

    /// Detail panel left, paginated grid right
    fn render_wide(&mut self, frame: &mut Frame, area: Rect) {
        self.release_strip();

        let [left, grid_area] = Layout::horizontal([
            Constraint::Percentage(DETAIL_WIDTH_PERCENT),
            Constraint::Min(0),
        ])
        .spacing(COLUMN_SPACING)
        .areas(area);

        let [detail_area, _] =
            Layout::vertical([Constraint::Length(DETAIL_HEIGHT), Constraint::Min(0)]).areas(left);

        render_detail(frame, detail_area, self.selection.selected());
        self.layout_regions.detail_panel = Some(detail_area);

        catalog_render::render_grid(self, frame, grid_area);
    }

    /// Detail panel on top, scrolling strip below
    fn render_narrow(&mut self, frame: &mut Frame, area: Rect) {
        let [detail_area, _, strip_area, _] = Layout::vertical([
            Constraint::Length(DETAIL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(STRIP_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(area);

        render_detail(frame, detail_area, self.selection.selected());
        self.layout_regions.detail_panel = Some(detail_area);

        catalog_render::render_strip(self, frame, strip_area);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(TITLE, theme::header::TITLE)),
        Line::from(Span::styled(
            SUBTITLE,
            Style::default().fg(theme::header::SUBTITLE),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
