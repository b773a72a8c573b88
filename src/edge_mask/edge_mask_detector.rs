//! Edge proximity detection for a horizontally scrollable element
//!
//! The detector attaches to one `ScrollStrip` at a time. While attached it holds
//! a scroll subscription on the strip and a resize subscription on the viewport;
//! both are released whenever it detaches, switches element, or is dropped.

use crate::listener::Subscription;
use crate::scroll::{ElementId, ScrollMetrics, ScrollStrip, Viewport};

/// Which edges have more content beyond them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeMasks {
    pub show_left: bool,
    pub show_right: bool,
}

impl EdgeMasks {
    /// `show_left = offset > threshold`, `show_right = offset + visible < total - threshold`
    pub fn compute(metrics: ScrollMetrics, threshold: u16) -> Self {
        let offset = i64::from(metrics.offset);
        let visible = i64::from(metrics.visible);
        let total = i64::from(metrics.total);
        let threshold = i64::from(threshold);

        Self {
            show_left: offset > threshold,
            show_right: offset + visible < total - threshold,
        }
    }
}

impl Default for EdgeMasks {
    /// Content starts at the left edge with more to the right
    fn default() -> Self {
        Self {
            show_left: false,
            show_right: true,
        }
    }
}

#[derive(Debug)]
struct Attachment {
    element: ElementId,
    scroll: Subscription<()>,
    resize: Subscription<()>,
}

#[derive(Debug, Default)]
pub struct EdgeMaskDetector {
    threshold: u16,
    masks: EdgeMasks,
    attachment: Option<Attachment>,
}

impl EdgeMaskDetector {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold,
            masks: EdgeMasks::default(),
            attachment: None,
        }
    }

    pub fn masks(&self) -> EdgeMasks {
        self.masks
    }

    pub fn show_left_mask(&self) -> bool {
        self.masks.show_left
    }

    pub fn show_right_mask(&self) -> bool {
        self.masks.show_right
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    pub fn attached_to(&self) -> Option<ElementId> {
        self.attachment.as_ref().map(|a| a.element)
    }

    /// Point the detector at `element`, or at nothing
    ///
    /// An absent element releases current listeners and leaves the masks as they
    /// were. The same element is a no-op. A different element gets an immediate
    /// evaluation followed by fresh listeners.
    pub fn observe(&mut self, element: Option<&mut ScrollStrip>, viewport: &mut Viewport) {
        let Some(element) = element else {
            self.detach();
            return;
        };

        if self.attached_to() == Some(element.id()) {
            return;
        }

        self.attach(element, viewport);
    }

    /// Change the threshold; an attached element is re-evaluated with fresh listeners
    pub fn set_threshold(
        &mut self,
        threshold: u16,
        element: Option<&mut ScrollStrip>,
        viewport: &mut Viewport,
    ) {
        if threshold == self.threshold {
            return;
        }
        self.threshold = threshold;
        self.detach();
        if let Some(element) = element {
            self.attach(element, viewport);
        }
    }

    /// Apply pending scroll and resize notifications
    ///
    /// Returns true when the masks changed.
    pub fn process(&mut self, element: &ScrollStrip) -> bool {
        let Some(attachment) = &self.attachment else {
            return false;
        };
        if attachment.element != element.id() {
            return false;
        }

        // Both queues must be drained, so no short-circuit here
        let scrolled = attachment.scroll.has_pending();
        let resized = attachment.resize.has_pending();
        if !(scrolled || resized) {
            return false;
        }

        self.update(element.metrics())
    }

    /// Release listeners; masks keep their last value
    pub fn detach(&mut self) {
        if let Some(attachment) = self.attachment.take() {
            #[cfg(debug_assertions)]
            log::debug!("Edge mask detached from {:?}", attachment.element);
            drop(attachment);
        }
    }

    fn attach(&mut self, element: &mut ScrollStrip, viewport: &mut Viewport) {
        self.detach();
        self.update(element.metrics());
        self.attachment = Some(Attachment {
            element: element.id(),
            scroll: element.subscribe_scroll(),
            resize: viewport.subscribe_resize(),
        });

        #[cfg(debug_assertions)]
        log::debug!(
            "Edge mask attached to {:?}: {:?}",
            element.id(),
            self.masks
        );
    }

    fn update(&mut self, metrics: ScrollMetrics) -> bool {
        let masks = EdgeMasks::compute(metrics, self.threshold);
        let changed = masks != self.masks;
        self.masks = masks;
        changed
    }
}

#[cfg(test)]
#[path = "edge_mask_detector_tests.rs"]
mod edge_mask_detector_tests;
