use std::collections::BTreeMap;

use log::debug;
use log::warn;

use crate::column::Column;
use crate::column::ColumnSet;
use crate::controls::FilterForm;
use crate::controls::PageSizeControl;
use crate::controls::PaginatorControl;
use crate::error::GridError;
use crate::query::OrderExpr;
use crate::query::Query;
use crate::state::GridState;
use crate::state::PageWindow;

use super::Action;
use super::ActionSet;
use super::GridSignal;
use super::GridView;
use super::RowActionRequest;

/// The grid controller.
///
/// Composes the column registry, the action registry, one abstract query
/// source and the request-scoped state, and owns the render pipeline that
/// turns them into a [`GridView`].
///
/// A request cycle: construct and configure, [`restore`](Grid::restore) the
/// round-tripped state, then either [`render`](Grid::render) (initial load)
/// or [`handle`](Grid::handle) (one inbound signal, then one render).
/// Afterwards [`state`](Grid::state) is serialized into the response for
/// the next round trip.
#[derive(Debug)]
pub struct Grid<Q> {
    source: Option<Q>,
    primary_key: Option<String>,
    columns: ColumnSet,
    actions: ActionSet,
    state: GridState,
    paginator: PaginatorControl,
    page_size: PageSizeControl,
    filter_form: FilterForm,
}

impl<Q: Query> Grid<Q> {
    pub fn new() -> Self {
        Self {
            source: None,
            primary_key: None,
            columns: ColumnSet::new(),
            actions: ActionSet::default(),
            state: GridState::default(),
            paginator: PaginatorControl::default(),
            page_size: PageSizeControl::default(),
            filter_form: FilterForm::default(),
        }
    }

    /// Attaches the data source every render derives its queries from.
    pub fn with_source(mut self, source: Q) -> Self {
        self.source = Some(source);
        self
    }

    /// Names the primary-key field whose value row actions dispatch with.
    pub fn with_primary_key(mut self, name: impl Into<String>) -> Self {
        self.primary_key = Some(name.into());
        self
    }

    /// Registers a column; names must be unique.
    pub fn add_column(&mut self, column: Column) -> Result<(), GridError> {
        self.columns.add(column)
    }

    /// Registers a row action.
    pub fn add_action(&mut self, action: Action) {
        self.actions.add(action);
    }

    /// Applies round-tripped state before handling.
    ///
    /// The page is normalized to at least 1. An unknown sort column is kept
    /// as-is and neutralized at render time.
    pub fn restore(&mut self, state: GridState) {
        self.state = state;
        self.state.page = self.state.page.max(1);
    }

    /// The current round-trip state, for the boundary layer to serialize.
    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// Paginator snapshot as of the last render.
    pub fn paginator(&self) -> &PaginatorControl {
        &self.paginator
    }

    /// Page-size control snapshot as of the last render.
    pub fn page_size_control(&self) -> &PageSizeControl {
        &self.page_size
    }

    /// Filter form as rebuilt by the last render.
    pub fn filter_form(&self) -> &FilterForm {
        &self.filter_form
    }

    /// Runs the dedicated handler for `signal`, then exactly one render.
    pub fn handle(&mut self, signal: GridSignal) -> Result<GridView, GridError> {
        match signal {
            GridSignal::Sort { column, page } => self.on_sort(&column, page),
            GridSignal::PageChanged {
                page,
                items_per_page,
            } => self.on_page_changed(page, items_per_page),
            GridSignal::FilterChanged { values } => self.on_filter_changed(values),
            GridSignal::FilterReset => self.on_filter_reset(),
            GridSignal::RowAction(request) => self.on_row_action(&request),
        }
        self.render()
    }

    fn on_sort(&mut self, column: &str, page: i64) {
        if self.state.sort.request(&self.columns, column) {
            self.state.page = page.max(1) as u64;
        } else {
            debug!("Ignoring sort request for unknown or unsortable column '{column}'");
        }
    }

    fn on_page_changed(&mut self, page: i64, items_per_page: i64) {
        self.state.page = page.max(1) as u64;
        self.state.items_per_page = items_per_page.max(0) as u64;
    }

    fn on_filter_changed(&mut self, values: BTreeMap<String, String>) {
        self.state.filters.set_values(values);
        self.state.page = 1;
    }

    fn on_filter_reset(&mut self) {
        self.state.filters.clear();
        self.state.page = 1;
    }

    fn on_row_action(&mut self, request: &RowActionRequest) {
        match request.validate() {
            Ok(echoed) => {
                self.restore(echoed);
                self.actions.dispatch(&request.signal, request.row_id);
            }
            Err(reason) => {
                debug!("Ignoring row action '{}': {reason}", request.signal);
            }
        }
    }

    /// Runs the full pipeline and assembles the view model.
    ///
    /// Fixed sequence, fail-fast: config validation, filters, sorting,
    /// count, windowed fetch, shape check, view assembly. Each render
    /// starts from a fresh builder chain off the base query.
    pub fn render(&mut self) -> Result<GridView, GridError> {
        let Some(source) = &self.source else {
            return Err(GridError::DataSourceMissing);
        };
        if !self.actions.is_empty() && self.primary_key.is_none() {
            return Err(GridError::MisconfiguredActions);
        }

        let mut query = source.clone();
        for column in self.columns.iter() {
            let Some(filter) = column.filter() else {
                continue;
            };
            let Some(value) = self.state.filters.active(column.name()) else {
                continue;
            };
            query = filter.apply(query, column.name(), value);
        }

        let query = self.apply_sort(query);

        let total_items = query.count()?;
        let window = PageWindow::compute(self.state.page, self.state.items_per_page, total_items);

        let page_query = if window.all {
            query
        } else {
            query.offset(window.offset).limit(window.length)
        };
        let rows = page_query.fetch_all()?;

        if let Some(first) = rows.first() {
            for column in self.columns.iter() {
                if !first.contains(column.name()) {
                    return Err(GridError::unknown_column(column.name()));
                }
            }
        }

        let view = GridView {
            rows,
            columns: self.columns.iter().cloned().collect(),
            sort: self.state.sort.clone(),
            actions: self.actions.iter().cloned().collect(),
            primary_key: self.primary_key.clone(),
            page: window.page,
            items_per_page: self.state.items_per_page,
            total_items,
            filters: self.state.filters.clone(),
        };

        self.paginator
            .set_paginator(window.page, self.state.items_per_page, total_items);
        self.paginator.set_sorting(self.state.sort.clone());
        self.page_size
            .set_snapshot(self.state.items_per_page, total_items);
        self.filter_form.rebuild(&self.columns, &self.state.filters);

        Ok(view)
    }

    /// Orders the query per the sort state, degrading instead of failing.
    ///
    /// Unknown or unsortable columns leave the query untouched. A
    /// natural-sort column first attempts a numeric-substring expression
    /// and falls back to lexicographic if the source rejects it; a source
    /// that rejects even that leaves the rows unordered.
    fn apply_sort(&self, query: Q) -> Q {
        let Some(name) = self.state.sort.column.as_deref() else {
            return query;
        };
        let Some(column) = self.columns.get(name) else {
            debug!("Ignoring sort state for unknown column '{name}'");
            return query;
        };
        if !column.is_sortable() {
            debug!("Ignoring sort state for unsortable column '{name}'");
            return query;
        }
        let direction = self.state.sort.order;

        if column.is_natural_sort() {
            match query.order_by(&OrderExpr::numeric_substring(name, direction)) {
                Ok(ordered) => return ordered,
                Err(err) => {
                    warn!("Falling back to lexicographic order on column '{name}': {err}");
                }
            }
        }
        match query.order_by(&OrderExpr::lexicographic(name, direction)) {
            Ok(ordered) => ordered,
            Err(err) => {
                warn!("Leaving rows unordered, source cannot sort column '{name}': {err}");
                query
            }
        }
    }
}

impl<Q: Query> Default for Grid<Q> {
    fn default() -> Self {
        Self::new()
    }
}
