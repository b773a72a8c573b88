use std::sync::atomic::{AtomicU64, Ordering};

use crate::listener::{Broadcaster, Subscription};

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a mounted scroll element; a remount gets a fresh id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u64);

impl ElementId {
    fn next() -> Self {
        ElementId(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Horizontal scroll position of an element, in columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMetrics {
    /// Columns scrolled past the left edge
    pub offset: u32,
    /// Width of the visible window
    pub visible: u32,
    /// Width of the whole scrollable content, which may exceed any terminal width
    pub total: u32,
}

/// A horizontally scrollable element
///
/// Every change of scroll position is announced to scroll listeners, including
/// the clamping that follows a change of content or window width.
#[derive(Debug)]
pub struct ScrollStrip {
    id: ElementId,
    metrics: ScrollMetrics,
    scroll_events: Broadcaster<()>,
}

impl ScrollStrip {
    pub fn new() -> Self {
        Self {
            id: ElementId::next(),
            metrics: ScrollMetrics::default(),
            scroll_events: Broadcaster::new(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    pub fn offset(&self) -> u32 {
        self.metrics.offset
    }

    pub fn max_offset(&self) -> u32 {
        self.metrics.total.saturating_sub(self.metrics.visible)
    }

    pub fn update_bounds(&mut self, total: u32, visible: u32) {
        if self.metrics.total == total && self.metrics.visible == visible {
            return;
        }
        self.metrics.total = total;
        self.metrics.visible = visible;
        self.metrics.offset = self.metrics.offset.min(self.max_offset());
        self.scroll_events.emit(());
    }

    pub fn scroll_to(&mut self, offset: u32) {
        let offset = offset.min(self.max_offset());
        if offset != self.metrics.offset {
            self.metrics.offset = offset;
            self.scroll_events.emit(());
        }
    }

    pub fn scroll_right(&mut self, cols: u32) {
        self.scroll_to(self.metrics.offset.saturating_add(cols));
    }

    pub fn scroll_left(&mut self, cols: u32) {
        self.scroll_to(self.metrics.offset.saturating_sub(cols));
    }

    pub fn jump_to_start(&mut self) {
        self.scroll_to(0);
    }

    pub fn jump_to_end(&mut self) {
        self.scroll_to(self.max_offset());
    }

    /// Scroll the minimum amount that makes columns `start..end` visible
    pub fn scroll_into_view(&mut self, start: u32, end: u32) {
        let offset = self.metrics.offset;
        let visible = self.metrics.visible;
        if start < offset {
            self.scroll_to(start);
        } else if end > offset.saturating_add(visible) {
            // Items wider than the window show their start
            let width = end.saturating_sub(start);
            if width <= visible {
                self.scroll_to(end.saturating_sub(visible));
            } else {
                self.scroll_to(start);
            }
        }
    }

    pub fn subscribe_scroll(&mut self) -> Subscription<()> {
        self.scroll_events.subscribe()
    }

    pub fn scroll_listener_count(&self) -> usize {
        self.scroll_events.listener_count()
    }
}

impl Default for ScrollStrip {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scroll_strip_tests.rs"]
mod scroll_strip_tests;
