use std::collections::BTreeMap;

use crate::query::Direction;
use crate::state::DEFAULT_ITEMS_PER_PAGE;
use crate::state::DEFAULT_PAGE;
use crate::state::FilterValues;
use crate::state::GridState;
use crate::state::SortState;

/// Inbound request signals, one per server-side handler.
#[derive(Debug, Clone)]
pub enum GridSignal {
    /// Header click: select or toggle the sort column. The page the header
    /// link carried is re-applied when the sort actually changes.
    Sort { column: String, page: i64 },
    /// Paginator or page-size navigation. Out-of-range values are
    /// normalized, never rejected.
    PageChanged { page: i64, items_per_page: i64 },
    /// Filter form submission; the value map replaces all stored filters.
    FilterChanged { values: BTreeMap<String, String> },
    /// Filter form reset: drop all stored filters.
    FilterReset,
    /// Row action carrying an echo of the state the row was rendered under.
    RowAction(RowActionRequest),
}

/// A row-action request: the action signal, the target row, and the echoed
/// view state to restore before dispatching.
///
/// Unlike navigation signals, the echoed scalars are validated strictly; a
/// request that fails validation is absorbed as a whole, leaving state and
/// actions untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowActionRequest {
    pub signal: String,
    pub row_id: i64,
    pub filters: BTreeMap<String, String>,
    pub page: i64,
    pub items_per_page: i64,
    pub sort_column: Option<String>,
    /// Raw order token (`asc`/`desc`, ASCII case-insensitive).
    pub order: Option<String>,
}

impl RowActionRequest {
    pub fn new(signal: impl Into<String>, row_id: i64) -> Self {
        Self {
            signal: signal.into(),
            row_id,
            filters: BTreeMap::new(),
            page: DEFAULT_PAGE as i64,
            items_per_page: DEFAULT_ITEMS_PER_PAGE as i64,
            sort_column: None,
            order: None,
        }
    }

    pub fn with_filters(mut self, filters: BTreeMap<String, String>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    pub fn with_items_per_page(mut self, items_per_page: i64) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    pub fn with_sort(mut self, column: impl Into<String>, order: impl Into<String>) -> Self {
        self.sort_column = Some(column.into());
        self.order = Some(order.into());
        self
    }

    /// Validates the echoed scalars and builds the state to restore.
    ///
    /// The error value names the offending field for the no-op log line.
    pub(crate) fn validate(&self) -> Result<GridState, &'static str> {
        if self.row_id < 1 {
            return Err("row id must be positive");
        }
        if self.page < 1 {
            return Err("page must be at least 1");
        }
        if self.items_per_page < 1 {
            return Err("items per page must be at least 1");
        }
        let order = match &self.order {
            Some(token) => match Direction::parse(token) {
                Some(direction) => direction,
                None => return Err("unrecognized order token"),
            },
            None => Direction::default(),
        };
        Ok(GridState {
            sort: SortState {
                column: self.sort_column.clone(),
                order,
            },
            page: self.page as u64,
            items_per_page: self.items_per_page as u64,
            filters: FilterValues::from(self.filters.clone()),
        })
    }
}
