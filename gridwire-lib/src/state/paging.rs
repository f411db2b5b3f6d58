/// Computed pagination window for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Effective page after lower-bound clamping.
    pub page: u64,
    /// Rows to skip before the window starts.
    pub offset: u64,
    /// Rows the window holds.
    pub length: u64,
    /// Whether the window spans the whole result set (page size 0).
    pub all: bool,
}

impl PageWindow {
    /// Derives the window for `page` at `page_size` over `item_count` rows.
    ///
    /// Page size 0 means all rows: page 1, offset 0, length equal to the
    /// item count. The page is clamped to at least 1. Pages past the end
    /// are not clamped; they produce a window beyond the data, which
    /// fetches as an empty row set.
    pub fn compute(page: u64, page_size: u64, item_count: u64) -> Self {
        if page_size == 0 {
            return Self {
                page: 1,
                offset: 0,
                length: item_count,
                all: true,
            };
        }
        let page = page.max(1);
        Self {
            page,
            offset: (page - 1).saturating_mul(page_size),
            length: page_size,
            all: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let window = PageWindow::compute(1, 20, 95);
        assert_eq!(window.page, 1);
        assert_eq!(window.offset, 0);
        assert_eq!(window.length, 20);
        assert!(!window.all);
    }

    #[test]
    fn test_later_page_offset() {
        let window = PageWindow::compute(3, 20, 95);
        assert_eq!(window.offset, 40);
        assert_eq!(window.length, 20);
    }

    #[test]
    fn test_size_zero_spans_everything() {
        let window = PageWindow::compute(7, 0, 95);
        assert_eq!(window.page, 1);
        assert_eq!(window.offset, 0);
        assert_eq!(window.length, 95);
        assert!(window.all);
    }

    #[test]
    fn test_page_zero_clamps_to_one() {
        let window = PageWindow::compute(0, 20, 95);
        assert_eq!(window.page, 1);
        assert_eq!(window.offset, 0);
    }

    #[test]
    fn test_page_past_the_end_is_kept() {
        let window = PageWindow::compute(50, 20, 95);
        assert_eq!(window.page, 50);
        assert_eq!(window.offset, 980);
    }
}
