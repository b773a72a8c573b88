use std::ops::Range;

use crate::catalog::catalog_render::{GRID_COLUMNS, strip_card_span, strip_cards_in_window};
use crate::catalog::{CatalogState, CatalogStatus, FetchSource, Skip, SkipFetcher};
use crate::config::Config;
use crate::edge_mask::EdgeMaskDetector;
use crate::error::SkipError;
use crate::layout::{LayoutMode, LayoutRegions};
use crate::notification::NotificationState;
use crate::pagination::{PageCache, PageState};
use crate::scroll::{ScrollStrip, Viewport};
use crate::selection::SelectionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Print the confirmed skip as JSON after the terminal is restored
    Selection,
}

/// Focus cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

pub struct App {
    pub catalog: CatalogState,
    pub fetcher: Option<SkipFetcher>,
    pub fetch_source: FetchSource,
    pub page: PageState,
    pub page_cache: PageCache,
    pub selection: SelectionState,
    /// Keyboard cursor, as an index into the full list
    pub focused: Option<usize>,
    /// Present only while the strip layout is on screen
    pub strip: Option<ScrollStrip>,
    pub edge_mask: EdgeMaskDetector,
    pub viewport: Viewport,
    pub layout_mode: LayoutMode,
    pub narrow_breakpoint: u16,
    pub layout_regions: LayoutRegions,
    pub notification: NotificationState,
    pub output_mode: Option<OutputMode>,
    pub should_quit: bool,
    /// Set by an explicit refresh so its outcome gets a notification
    refresh_requested: bool,
}

impl App {
    pub fn new(config: &Config, fetch_source: FetchSource) -> Self {
        Self {
            catalog: CatalogState::new(),
            fetcher: None,
            fetch_source,
            page: PageState::new(config.catalog.page_size),
            page_cache: PageCache::new(),
            selection: SelectionState::new(),
            focused: None,
            strip: None,
            edge_mask: EdgeMaskDetector::new(config.catalog.edge_mask_threshold),
            viewport: Viewport::default(),
            layout_mode: LayoutMode::default(),
            narrow_breakpoint: config.catalog.narrow_breakpoint,
            layout_regions: LayoutRegions::new(),
            notification: NotificationState::new(),
            output_mode: None,
            should_quit: false,
            refresh_requested: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output_mode(&self) -> Option<OutputMode> {
        self.output_mode
    }

    pub fn status(&self) -> CatalogStatus {
        self.catalog.status()
    }

    /// Start a background fetch unless one is already running
    pub fn start_fetch(&mut self) {
        if self.fetcher.as_ref().is_some_and(|f| f.is_in_flight()) {
            return;
        }
        self.catalog.begin_fetch();
        self.fetcher = Some(SkipFetcher::spawn(self.fetch_source.clone()));
    }

    /// Explicit refresh from the user
    pub fn refresh(&mut self) {
        if self.fetcher.as_ref().is_some_and(|f| f.is_in_flight()) {
            return;
        }
        self.notification.show("Refreshing skips...");
        self.refresh_requested = true;
        self.start_fetch();
    }

    /// Check the background fetch; returns true when it settled this call
    pub fn poll_fetcher(&mut self) -> bool {
        let Some(fetcher) = self.fetcher.as_mut() else {
            return false;
        };
        let Some(result) = fetcher.poll() else {
            return false;
        };
        self.fetcher = None;
        self.apply_fetch_result(result);
        true
    }

    /// Settle the catalog with a fetch outcome
    ///
    /// Success replaces the list and pulls the page and focus back into range.
    /// Failure is logged and keeps whatever was fetched before.
    pub fn apply_fetch_result(&mut self, result: Result<Vec<Skip>, SkipError>) {
        let announce = std::mem::take(&mut self.refresh_requested);
        match result {
            Ok(skips) => {
                let count = skips.len();
                self.catalog.replace(skips);
                if self.page.clamp_to(count) {
                    #[cfg(debug_assertions)]
                    log::debug!("Page clamped to {} after refresh", self.page.page());
                }
                self.focused = self.focused.filter(|_| count > 0).map(|i| i.min(count - 1));
                if announce {
                    self.notification.show(&format!("Loaded {} skips", count));
                }
            }
            Err(e) => {
                log::error!("Failed to fetch skips: {}", e);
                self.catalog.settle_failed();
            }
        }
    }

    /// Track the terminal size and the layout it implies
    pub fn set_viewport_size(&mut self, width: u16, height: u16) {
        self.viewport.resize(width, height);
        let mode = LayoutMode::for_width(width, self.narrow_breakpoint);
        if mode != self.layout_mode {
            #[cfg(debug_assertions)]
            log::debug!("Layout switched to {:?} at width {}", mode, width);
            self.layout_mode = mode;
        }
    }

    /// Index range of the current page, memoized across redraws
    pub fn visible_range(&mut self) -> Range<usize> {
        self.page_cache
            .range(self.catalog.revision(), self.catalog.len(), &self.page)
    }

    /// Skips on the current page
    pub fn page_skips(&mut self) -> &[Skip] {
        let range = self.visible_range();
        &self.catalog.skips()[range]
    }

    pub fn next_page(&mut self) -> bool {
        if !self.page.next_page(self.catalog.len()) {
            return false;
        }
        self.on_page_changed();
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if !self.page.prev_page() {
            return false;
        }
        self.on_page_changed();
        true
    }

    fn on_page_changed(&mut self) {
        #[cfg(debug_assertions)]
        log::debug!("Page changed to {}", self.page.page());

        if self.focused.is_some() {
            let range = self.visible_range();
            self.focused = (!range.is_empty()).then_some(range.start);
        }
    }

    /// Select the skip at `index` in the full list
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.catalog.skips().get(index) {
            Some(skip) => self.selection.select(skip),
            None => false,
        }
    }

    pub fn select_focused(&mut self) -> bool {
        match self.focused {
            Some(index) => self.select_index(index),
            None => false,
        }
    }

    /// Mark the selection for output and quit; without a selection only a hint is shown
    pub fn confirm(&mut self) {
        if self.selection.selected().is_some() {
            self.output_mode = Some(OutputMode::Selection);
            self.should_quit = true;
        } else {
            self.notification.show("Select a skip first");
        }
    }

    /// The confirmed skip as pretty JSON
    pub fn selection_json(&self) -> Option<Result<String, SkipError>> {
        self.selection
            .selected()
            .map(|skip| serde_json::to_string_pretty(skip).map_err(SkipError::from))
    }

    pub fn move_focus(&mut self, direction: Direction) {
        if self.catalog.is_empty() {
            return;
        }
        match self.layout_mode {
            LayoutMode::Wide => self.move_focus_in_grid(direction),
            LayoutMode::Narrow => self.move_focus_in_strip(direction),
        }
    }

    fn move_focus_in_grid(&mut self, direction: Direction) {
        let range = self.visible_range();
        if range.is_empty() {
            return;
        }

        let current = match self.focused {
            Some(index) if range.contains(&index) => index,
            _ => {
                self.focused = Some(range.start);
                return;
            }
        };

        let slot = current - range.start;
        let target = match direction {
            Direction::Left if slot % GRID_COLUMNS > 0 => current - 1,
            Direction::Right if slot % GRID_COLUMNS < GRID_COLUMNS - 1 => current + 1,
            Direction::Up if slot >= GRID_COLUMNS => current - GRID_COLUMNS,
            Direction::Down => current + GRID_COLUMNS,
            _ => current,
        };

        if range.contains(&target) {
            self.focused = Some(target);
        }
    }

    fn move_focus_in_strip(&mut self, direction: Direction) {
        let last = self.catalog.len() - 1;
        let target = match (self.focused, direction) {
            (None, _) => self.first_visible_strip_card(),
            (Some(index), Direction::Left) => index.saturating_sub(1),
            (Some(index), Direction::Right) => (index + 1).min(last),
            (Some(index), _) => index,
        };
        self.focus_strip_card(target.min(last));
    }

    /// Focus the first or last card of the strip (or of the page in the grid)
    pub fn focus_edge(&mut self, to_end: bool) {
        if self.catalog.is_empty() {
            return;
        }
        match self.layout_mode {
            LayoutMode::Wide => {
                let range = self.visible_range();
                if !range.is_empty() {
                    self.focused = Some(if to_end { range.end - 1 } else { range.start });
                }
            }
            LayoutMode::Narrow => {
                let target = if to_end { self.catalog.len() - 1 } else { 0 };
                self.focus_strip_card(target);
                if let Some(strip) = self.strip.as_mut() {
                    if to_end {
                        strip.jump_to_end();
                    } else {
                        strip.jump_to_start();
                    }
                }
            }
        }
    }

    fn focus_strip_card(&mut self, index: usize) {
        self.focused = Some(index);
        if let Some(strip) = self.strip.as_mut() {
            let (start, end) = strip_card_span(index);
            strip.scroll_into_view(start, end);
        }
    }

    fn first_visible_strip_card(&self) -> usize {
        let offset = self.strip.as_ref().map_or(0, |s| s.offset());
        let visible = self.strip.as_ref().map_or(0, |s| s.metrics().visible);
        let count = self.catalog.len();
        let window = strip_cards_in_window(count, offset, visible);
        window
            .clone()
            .find(|&i| strip_card_span(i).0 >= offset)
            .unwrap_or(window.start)
    }

    /// Scroll the strip by `cols` columns; negative scrolls left
    pub fn scroll_strip(&mut self, cols: i32) {
        let Some(strip) = self.strip.as_mut() else {
            return;
        };
        let amount = cols.unsigned_abs();
        if cols < 0 {
            strip.scroll_left(amount);
        } else {
            strip.scroll_right(amount);
        }
    }

    /// Drop the strip and stop observing it
    pub fn release_strip(&mut self) {
        if self.strip.take().is_some() {
            self.edge_mask.observe(None, &mut self.viewport);
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
