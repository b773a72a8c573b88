//! Grid or strip, chosen from the terminal width

/// How the catalog lays out its cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Detail panel on the left, paginated grid on the right
    #[default]
    Wide,
    /// Detail panel on top, one horizontally scrolling row with edge masks below
    Narrow,
}

impl LayoutMode {
    /// Narrow when the width is at or below the breakpoint
    pub fn for_width(width: u16, breakpoint: u16) -> Self {
        if width <= breakpoint {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }
}
