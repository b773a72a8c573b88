//! Layout regions tracking for UI components
//!
//! Tracks where UI components are rendered for position-aware mouse interactions.

use ratatui::layout::Rect;

/// Identifies a UI component region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// A card, by its index into the full skip list
    Card(usize),
    PagePrev,
    PageNext,
    /// Strip background (gaps between cards, scrollbar row)
    Strip,
    DetailPanel,
}

/// Tracks rendered areas of UI components
///
/// Updated during each render pass. Regions are `None` (or empty) when the
/// component is not visible. Card rects are stored in screen coordinates and
/// already clipped to what is on screen.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    pub cards: Vec<(usize, Rect)>,
    pub page_prev: Option<Rect>,
    pub page_next: Option<Rect>,
    pub strip: Option<Rect>,
    pub detail_panel: Option<Rect>,
}

impl LayoutRegions {
    /// Create a new empty LayoutRegions
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        self.cards.clear();
        self.page_prev = None;
        self.page_next = None;
        self.strip = None;
        self.detail_panel = None;
    }

    pub fn push_card(&mut self, index: usize, rect: Rect) {
        if rect.width > 0 && rect.height > 0 {
            self.cards.push((index, rect));
        }
    }

    /// Screen rect of the card at `index`, if it was drawn
    pub fn card_rect(&self, index: usize) -> Option<Rect> {
        self.cards
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, rect)| *rect)
    }
}
