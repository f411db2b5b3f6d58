use crate::grid::GridSignal;
use crate::state::DEFAULT_ITEMS_PER_PAGE;
use crate::state::DEFAULT_PAGE;
use crate::state::SortState;

/// Pagination control holding a read-only snapshot of the last render.
///
/// The grid pushes page, size, count and sorting down after every render;
/// the control turns template clicks into [`GridSignal::PageChanged`]
/// values that echo the snapshot's page size. The sorting snapshot is
/// carried so page links can re-render the current sort indicators.
#[derive(Debug, Clone)]
pub struct PaginatorControl {
    page: u64,
    items_per_page: u64,
    item_count: u64,
    sort: SortState,
}

impl PaginatorControl {
    pub(crate) fn set_paginator(&mut self, page: u64, items_per_page: u64, item_count: u64) {
        self.page = page;
        self.items_per_page = items_per_page;
        self.item_count = item_count;
    }

    pub(crate) fn set_sorting(&mut self, sort: SortState) {
        self.sort = sort;
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn items_per_page(&self) -> u64 {
        self.items_per_page
    }

    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Total pages; a page size of 0 collapses everything onto one page.
    pub fn page_count(&self) -> u64 {
        if self.items_per_page == 0 {
            return 1;
        }
        self.item_count.div_ceil(self.items_per_page).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Signal navigating to the previous page, clamped at the first.
    pub fn previous_page(&self) -> GridSignal {
        self.select_page(self.page.saturating_sub(1).max(1))
    }

    /// Signal navigating to the next page, clamped at the last.
    pub fn next_page(&self) -> GridSignal {
        self.select_page((self.page + 1).min(self.page_count()))
    }

    /// Signal navigating to `page`, carrying the snapshot's page size.
    pub fn select_page(&self, page: u64) -> GridSignal {
        GridSignal::PageChanged {
            page: page as i64,
            items_per_page: self.items_per_page as i64,
        }
    }
}

impl Default for PaginatorControl {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            item_count: 0,
            sort: SortState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(page: u64, items_per_page: u64, item_count: u64) -> PaginatorControl {
        let mut control = PaginatorControl::default();
        control.set_paginator(page, items_per_page, item_count);
        control
    }

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(snapshot(1, 20, 100).page_count(), 5);
        assert_eq!(snapshot(1, 20, 101).page_count(), 6);
        assert_eq!(snapshot(1, 20, 1).page_count(), 1);
        assert_eq!(snapshot(1, 20, 0).page_count(), 1);
    }

    #[test]
    fn test_size_zero_is_one_page() {
        let control = snapshot(1, 0, 500);
        assert_eq!(control.page_count(), 1);
        assert!(!control.has_previous());
        assert!(!control.has_next());
    }

    #[test]
    fn test_navigation_bounds() {
        let first = snapshot(1, 20, 100);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = snapshot(5, 20, 100);
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn test_previous_and_next_clamp() {
        let first = snapshot(1, 20, 100);
        assert!(matches!(
            first.previous_page(),
            GridSignal::PageChanged { page: 1, .. }
        ));

        let last = snapshot(5, 20, 100);
        assert!(matches!(
            last.next_page(),
            GridSignal::PageChanged { page: 5, .. }
        ));
    }

    #[test]
    fn test_select_page_echoes_snapshot_size() {
        let control = snapshot(2, 50, 100);
        assert!(matches!(
            control.select_page(2),
            GridSignal::PageChanged {
                page: 2,
                items_per_page: 50
            }
        ));
    }
}
