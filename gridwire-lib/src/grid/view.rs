use crate::column::Column;
use crate::model::Row;
use crate::state::FilterValues;
use crate::state::SortState;

use super::Action;

/// The fully computed, read-only payload handed to the presentation layer
/// for one render.
///
/// Everything is owned, so the view outlives the grid and can cross a
/// template or serialization boundary freely.
#[derive(Debug, Clone)]
pub struct GridView {
    pub(crate) rows: Vec<Row>,
    pub(crate) columns: Vec<Column>,
    pub(crate) sort: SortState,
    pub(crate) actions: Vec<Action>,
    pub(crate) primary_key: Option<String>,
    pub(crate) page: u64,
    pub(crate) items_per_page: u64,
    pub(crate) total_items: u64,
    pub(crate) filters: FilterValues,
}

impl GridView {
    /// The fetched page of rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Columns in registration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn primary_key(&self) -> Option<&str> {
        self.primary_key.as_deref()
    }

    /// Effective page (after window clamping).
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Raw page size; 0 means all rows on one page.
    pub fn items_per_page(&self) -> u64 {
        self.items_per_page
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn filters(&self) -> &FilterValues {
        &self.filters
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
