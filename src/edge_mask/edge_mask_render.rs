//! Edge mask overlays: faded columns plus an arrow at each edge with more content

use ratatui::{Frame, buffer::Buffer, layout::Rect, style::Style};

use super::edge_mask_detector::EdgeMasks;
use crate::theme;

const LEFT_ARROW: &str = "‹";
const RIGHT_ARROW: &str = "›";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Left,
    Right,
}

/// Draw the masks over an already rendered strip area
pub fn render_masks(frame: &mut Frame, area: Rect, masks: EdgeMasks) {
    let buf = frame.buffer_mut();
    if masks.show_left {
        fade_edge(buf, area, Edge::Left);
    }
    if masks.show_right {
        fade_edge(buf, area, Edge::Right);
    }
}

fn fade_edge(buf: &mut Buffer, area: Rect, edge: Edge) {
    let ramp = theme::edge_mask::FADE_RAMP;
    let depth = (ramp.len() as u16).min(area.width);
    if depth == 0 || area.height == 0 {
        return;
    }

    for step in 0..depth {
        let x = match edge {
            Edge::Left => area.x + step,
            Edge::Right => area.x + area.width - 1 - step,
        };
        let style = Style::default().fg(ramp[step as usize]);
        for y in area.y..area.y + area.height {
            buf[(x, y)].set_style(style);
        }
    }

    let (arrow, x) = match edge {
        Edge::Left => (LEFT_ARROW, area.x),
        Edge::Right => (RIGHT_ARROW, area.x + area.width - 1),
    };
    let y = area.y + area.height / 2;
    buf.set_string(x, y, arrow, Style::default().fg(theme::edge_mask::ARROW));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(masks: EdgeMasks) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_masks(f, area, masks);
            })
            .unwrap();
        terminal
    }

    #[test]
    fn test_no_masks_leave_buffer_untouched() {
        let terminal = render(EdgeMasks {
            show_left: false,
            show_right: false,
        });
        let output = terminal.backend().to_string();
        assert!(!output.contains(LEFT_ARROW));
        assert!(!output.contains(RIGHT_ARROW));
    }

    #[test]
    fn test_right_mask_only() {
        let terminal = render(EdgeMasks::default());
        let buffer = terminal.backend().buffer();

        assert_eq!(buffer[(19, 1)].symbol(), RIGHT_ARROW);
        assert_eq!(buffer[(0, 1)].symbol(), " ");
        assert_eq!(buffer[(18, 0)].fg, theme::edge_mask::FADE_RAMP[1]);
    }

    #[test]
    fn test_both_masks() {
        let terminal = render(EdgeMasks {
            show_left: true,
            show_right: true,
        });
        let buffer = terminal.backend().buffer();

        assert_eq!(buffer[(0, 1)].symbol(), LEFT_ARROW);
        assert_eq!(buffer[(19, 1)].symbol(), RIGHT_ARROW);
        assert_eq!(buffer[(0, 0)].fg, theme::edge_mask::FADE_RAMP[0]);
        assert_eq!(buffer[(2, 2)].fg, theme::edge_mask::FADE_RAMP[2]);
    }
}
