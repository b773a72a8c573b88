//! Fetched skip list plus the in-flight flag used to pick the status message

use super::skip::Skip;

/// What the catalog area should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus {
    /// Fetch in flight and nothing known yet
    Loading,
    /// Fetch settled with zero items (failures included)
    Empty,
    Ready,
}

#[derive(Debug, Default)]
pub struct CatalogState {
    skips: Vec<Skip>,
    fetching: bool,
    /// Bumped whenever `skips` is replaced, keys the page cache
    revision: u64,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skips(&self) -> &[Skip] {
        &self.skips
    }

    pub fn len(&self) -> usize {
        self.skips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skips.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn begin_fetch(&mut self) {
        self.fetching = true;
    }

    /// Settle a successful fetch with a new list
    pub fn replace(&mut self, skips: Vec<Skip>) {
        self.skips = skips;
        self.fetching = false;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Settle a failed fetch, keeping whatever was fetched before
    pub fn settle_failed(&mut self) {
        self.fetching = false;
    }

    pub fn status(&self) -> CatalogStatus {
        if !self.skips.is_empty() {
            CatalogStatus::Ready
        } else if self.fetching {
            CatalogStatus::Loading
        } else {
            CatalogStatus::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::sample_skips;

    #[test]
    fn test_new_catalog_is_empty_and_settled() {
        let catalog = CatalogState::new();
        assert!(catalog.is_empty());
        assert!(!catalog.is_fetching());
        assert_eq!(catalog.status(), CatalogStatus::Empty);
    }

    #[test]
    fn test_loading_while_fetching_without_items() {
        let mut catalog = CatalogState::new();
        catalog.begin_fetch();
        assert_eq!(catalog.status(), CatalogStatus::Loading);
    }

    #[test]
    fn test_replace_settles_and_bumps_revision() {
        let mut catalog = CatalogState::new();
        catalog.begin_fetch();
        catalog.replace(sample_skips(3));

        assert_eq!(catalog.status(), CatalogStatus::Ready);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.revision(), 1);
        assert!(!catalog.is_fetching());
    }

    #[test]
    fn test_settled_with_zero_items_is_empty() {
        let mut catalog = CatalogState::new();
        catalog.begin_fetch();
        catalog.replace(Vec::new());
        assert_eq!(catalog.status(), CatalogStatus::Empty);
    }

    #[test]
    fn test_failed_first_fetch_is_empty() {
        let mut catalog = CatalogState::new();
        catalog.begin_fetch();
        catalog.settle_failed();
        assert_eq!(catalog.status(), CatalogStatus::Empty);
    }

    #[test]
    fn test_failed_refresh_keeps_previous_items() {
        let mut catalog = CatalogState::new();
        catalog.replace(sample_skips(5));
        catalog.begin_fetch();

        // Items stay visible while refreshing
        assert_eq!(catalog.status(), CatalogStatus::Ready);

        catalog.settle_failed();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.revision(), 1);
        assert_eq!(catalog.status(), CatalogStatus::Ready);
    }
}
