//! The currently selected skip
//!
//! Selection is sticky: page changes and data refreshes never clear it.

use crate::catalog::Skip;

#[derive(Debug, Default)]
pub struct SelectionState {
    selected: Option<Skip>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `skip`; returns false when it was already the selection
    pub fn select(&mut self, skip: &Skip) -> bool {
        if self.is_selected(skip.id) {
            return false;
        }

        #[cfg(debug_assertions)]
        log::debug!("Selected skip {} ({} yard)", skip.id, skip.size);

        self.selected = Some(skip.clone());
        true
    }

    pub fn selected(&self) -> Option<&Skip> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selected.as_ref().is_some_and(|s| s.id == id)
    }
}
