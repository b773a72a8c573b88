use crate::listener::{Broadcaster, Subscription};

/// The terminal window enclosing every element
#[derive(Debug, Default)]
pub struct Viewport {
    width: u16,
    height: u16,
    resize_events: Broadcaster<()>,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            resize_events: Broadcaster::new(),
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Record a new terminal size; announces it to resize listeners when it changed
    pub fn resize(&mut self, width: u16, height: u16) -> bool {
        if (width, height) == (self.width, self.height) {
            return false;
        }
        self.width = width;
        self.height = height;
        self.resize_events.emit(());
        true
    }

    pub fn subscribe_resize(&mut self) -> Subscription<()> {
        self.resize_events.subscribe()
    }

    pub fn resize_listener_count(&self) -> usize {
        self.resize_events.listener_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_reports_change() {
        let mut viewport = Viewport::new(80, 24);
        assert!(viewport.resize(120, 40));
        assert_eq!(viewport.size(), (120, 40));
        assert!(!viewport.resize(120, 40));
    }

    #[test]
    fn test_resize_notifies_listeners() {
        let mut viewport = Viewport::new(80, 24);
        let sub = viewport.subscribe_resize();

        viewport.resize(80, 24);
        assert!(!sub.has_pending());

        viewport.resize(60, 24);
        assert!(sub.has_pending());
    }

    #[test]
    fn test_resize_listener_count() {
        let mut viewport = Viewport::new(80, 24);
        let sub = viewport.subscribe_resize();
        assert_eq!(viewport.resize_listener_count(), 1);
        drop(sub);
        assert_eq!(viewport.resize_listener_count(), 0);
    }
}
