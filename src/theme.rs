//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Depot - warm amber primary on a charcoal background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    // Text colors
    pub const TEXT: Color = Color::Rgb(236, 236, 240);
    pub const TEXT_DIM: Color = Color::Rgb(92, 92, 104);
    pub const TEXT_MUTED: Color = Color::Rgb(140, 140, 152);

    // Background colors - charcoal
    pub const BG_DARK: Color = Color::Rgb(24, 24, 27);
    pub const BG_SURFACE: Color = Color::Rgb(39, 39, 42);
    pub const BG_HOVER: Color = Color::Rgb(52, 52, 58);

    // Semantic colors
    pub const SUCCESS: Color = Color::Rgb(74, 222, 128);
    pub const WARNING: Color = Color::Rgb(250, 204, 21);
    pub const ERROR: Color = Color::Rgb(248, 113, 113);

    // Primary accent
    pub const PRIMARY: Color = Color::Rgb(245, 158, 11);
    pub const PRIMARY_DIM: Color = Color::Rgb(120, 78, 10);
}

/// Page header styles
pub mod header {
    use super::*;

    pub const TITLE: Style = Style::new()
        .fg(palette::TEXT)
        .add_modifier(Modifier::BOLD);
    pub const SUBTITLE: Color = palette::TEXT_MUTED;
}

/// Skip card (grid cell / strip entry) styles
pub mod card {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const BORDER_SELECTED: Color = palette::PRIMARY;
    pub const BORDER_FOCUSED: Color = palette::TEXT_MUTED;

    pub const BACKGROUND: Color = palette::BG_SURFACE;
    pub const BACKGROUND_SELECTED: Color = palette::PRIMARY_DIM;
    pub const BACKGROUND_FOCUSED: Color = palette::BG_HOVER;

    pub const SIZE: Style = Style::new()
        .fg(palette::TEXT)
        .add_modifier(Modifier::BOLD);
    pub const PRICE: Color = palette::TEXT_MUTED;
    pub const SELECTED_MARKER: Color = palette::PRIMARY;
}

/// Selected skip detail panel styles
pub mod detail {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const TITLE: Style = Style::new()
        .fg(palette::TEXT)
        .add_modifier(Modifier::BOLD);
    pub const PRICE_BADGE: Style = Style::new()
        .fg(palette::BG_DARK)
        .bg(palette::PRIMARY)
        .add_modifier(Modifier::BOLD);
    pub const FIELD_LABEL: Style = Style::new()
        .fg(palette::TEXT)
        .add_modifier(Modifier::BOLD);
    pub const FIELD_VALUE: Color = palette::TEXT_MUTED;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
    pub const BADGE_YES: Color = palette::SUCCESS;
    pub const BADGE_NO: Color = palette::ERROR;
    pub const BADGE_TEXT: Color = palette::TEXT;
    pub const FORBIDDEN: Style = Style::new()
        .fg(palette::TEXT)
        .bg(palette::ERROR)
        .add_modifier(Modifier::BOLD);
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;
}

/// Pagination controls styles
pub mod pagination {
    use super::*;

    pub const BUTTON: Style = Style::new()
        .fg(palette::BG_DARK)
        .bg(palette::PRIMARY);
    pub const BUTTON_DISABLED: Style = Style::new()
        .fg(palette::TEXT_DIM)
        .bg(palette::BG_SURFACE)
        .add_modifier(Modifier::DIM);
    pub const LABEL: Color = palette::TEXT;
}

/// Edge mask overlay styles (strip layout)
pub mod edge_mask {
    use super::*;

    /// Foreground ramp from the edge inward; the first entry is the most faded
    pub const FADE_RAMP: &[Color] = &[
        Color::Rgb(40, 40, 44),
        Color::Rgb(64, 64, 70),
        Color::Rgb(96, 96, 104),
    ];
    pub const ARROW: Color = palette::PRIMARY;
}

/// Catalog status message styles (loading / empty)
pub mod status {
    use super::*;

    pub const BORDER: Color = palette::BG_HOVER;
    pub const MESSAGE: Color = palette::TEXT_MUTED;
}

/// Notification styles
pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::BG_HOVER,
        border: palette::TEXT_MUTED,
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: palette::BG_DARK,
        bg: palette::WARNING,
        border: palette::WARNING,
    };
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}

/// Scrollbar styles
pub mod scrollbar {
    use super::*;

    pub const THUMB: Color = palette::PRIMARY;
    pub const TRACK: Color = palette::BG_HOVER;
}
