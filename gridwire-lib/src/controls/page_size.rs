use crate::grid::GridSignal;
use crate::state::DEFAULT_ITEMS_PER_PAGE;
use crate::state::DEFAULT_PAGE;

/// Fixed page-size choices offered by the control; 0 renders as "All".
pub const PAGE_SIZE_CHOICES: [u64; 4] = [20, 50, 100, 0];

/// Page-size selector holding a read-only snapshot of the last render.
#[derive(Debug, Clone)]
pub struct PageSizeControl {
    current_size: u64,
    total_items: u64,
}

impl PageSizeControl {
    pub(crate) fn set_snapshot(&mut self, current_size: u64, total_items: u64) {
        self.current_size = current_size;
        self.total_items = total_items;
    }

    pub fn current_size(&self) -> u64 {
        self.current_size
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// The fixed selectable sizes, in display order.
    pub fn choices(&self) -> &'static [u64] {
        &PAGE_SIZE_CHOICES
    }

    /// Display label for a size choice.
    pub fn label_for(&self, size: u64) -> String {
        if size == 0 {
            "All".to_string()
        } else {
            size.to_string()
        }
    }

    /// Signal selecting a new page size, forcing the page back to 1.
    ///
    /// Sizes outside the fixed choices are emitted as-is; the grid
    /// normalizes whatever it receives.
    pub fn select_size(&self, size: i64) -> GridSignal {
        GridSignal::PageChanged {
            page: DEFAULT_PAGE as i64,
            items_per_page: size,
        }
    }
}

impl Default for PageSizeControl {
    fn default() -> Self {
        Self {
            current_size: DEFAULT_ITEMS_PER_PAGE,
            total_items: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let control = PageSizeControl::default();
        assert_eq!(control.label_for(20), "20");
        assert_eq!(control.label_for(100), "100");
        assert_eq!(control.label_for(0), "All");
    }

    #[test]
    fn test_select_size_forces_first_page() {
        let control = PageSizeControl::default();
        assert!(matches!(
            control.select_size(50),
            GridSignal::PageChanged {
                page: 1,
                items_per_page: 50
            }
        ));
    }

    #[test]
    fn test_unknown_size_is_emitted_unchanged() {
        let control = PageSizeControl::default();
        assert!(matches!(
            control.select_size(-3),
            GridSignal::PageChanged {
                page: 1,
                items_per_page: -3
            }
        ));
    }

    #[test]
    fn test_default_snapshot() {
        let control = PageSizeControl::default();
        assert_eq!(control.current_size(), DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(control.total_items(), 0);
        assert_eq!(control.choices(), &[20, 50, 100, 0]);
    }
}
