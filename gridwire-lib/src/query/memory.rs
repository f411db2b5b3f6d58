//! In-memory query implementation over a shared row vector.

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::SourceError;
use crate::error::UnsupportedOrder;
use crate::model::CellValue;
use crate::model::Row;

use super::Direction;
use super::OrderExpr;
use super::OrderKind;
use super::Predicate;
use super::Query;

/// An in-memory data source backing tests and the demo binary.
///
/// The row set is shared behind an `Arc`, so the builder operations are
/// cheap: each returns a new `MemoryQuery` with its own predicate, order and
/// window state while the rows stay in place.
///
/// LIKE predicates are evaluated case-insensitively and honor `\` escapes.
/// Date predicates read `Date` and `DateTime` cells as calendar dates and
/// also accept `%Y-%m-%d` strings. Sorting is stable; for numeric-substring
/// ordering, rows whose value carries no digits order first ascending.
#[derive(Debug, Clone)]
pub struct MemoryQuery {
    rows: Arc<Vec<Row>>,
    predicates: Vec<Predicate>,
    order: Option<OrderExpr>,
    limit: Option<u64>,
    offset: Option<u64>,
    natural_order: bool,
}

impl MemoryQuery {
    /// Creates a new query over the given rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows: Arc::new(rows),
            predicates: Vec::new(),
            order: None,
            limit: None,
            offset: None,
            natural_order: true,
        }
    }

    /// Returns a copy of this source that rejects numeric-substring
    /// ordering, forcing callers onto the lexicographic fallback.
    pub fn without_natural_order(mut self) -> Self {
        self.natural_order = false;
        self
    }

    fn matches(&self, row: &Row) -> bool {
        self.predicates.iter().all(|predicate| match predicate {
            Predicate::Like { column, pattern } => {
                cell_text(row, column).is_some_and(|text| like_match(pattern, &text))
            }
            Predicate::DateEquals { column, date } => {
                cell_date(row, column).is_some_and(|d| d == *date)
            }
            Predicate::DateBetween { column, from, to } => {
                cell_date(row, column).is_some_and(|d| d >= *from && d <= *to)
            }
            Predicate::DateOnOrAfter { column, from } => {
                cell_date(row, column).is_some_and(|d| d >= *from)
            }
            Predicate::DateOnOrBefore { column, to } => {
                cell_date(row, column).is_some_and(|d| d <= *to)
            }
        })
    }
}

impl Query for MemoryQuery {
    fn filter(&self, predicate: &Predicate) -> Self {
        let mut next = self.clone();
        next.predicates.push(predicate.clone());
        next
    }

    fn order_by(&self, order: &OrderExpr) -> Result<Self, UnsupportedOrder> {
        if order.kind() == OrderKind::NumericSubstring && !self.natural_order {
            return Err(UnsupportedOrder::new(order.column()));
        }
        let mut next = self.clone();
        next.order = Some(order.clone());
        Ok(next)
    }

    fn limit(&self, n: u64) -> Self {
        let mut next = self.clone();
        next.limit = Some(n);
        next
    }

    fn offset(&self, n: u64) -> Self {
        let mut next = self.clone();
        next.offset = Some(n);
        next
    }

    fn count(&self) -> Result<u64, SourceError> {
        Ok(self.rows.iter().filter(|row| self.matches(row)).count() as u64)
    }

    fn fetch_all(&self) -> Result<Vec<Row>, SourceError> {
        let mut matched: Vec<&Row> = self.rows.iter().filter(|row| self.matches(row)).collect();

        if let Some(order) = &self.order {
            sort_rows(&mut matched, order);
        }

        let offset = usize::try_from(self.offset.unwrap_or(0)).unwrap_or(usize::MAX);
        let windowed = matched.into_iter().skip(offset);
        let rows = match self.limit {
            Some(limit) => windowed
                .take(usize::try_from(limit).unwrap_or(usize::MAX))
                .cloned()
                .collect(),
            None => windowed.cloned().collect(),
        };
        Ok(rows)
    }
}

fn sort_rows(rows: &mut [&Row], order: &OrderExpr) {
    let column = order.column();
    match order.kind() {
        OrderKind::Lexicographic => rows.sort_by(|a, b| {
            let ordering = cell_text(a, column).cmp(&cell_text(b, column));
            directed(ordering, order.direction())
        }),
        OrderKind::NumericSubstring => rows.sort_by(|a, b| {
            let a_key = cell_text(a, column).as_deref().and_then(numeric_key);
            let b_key = cell_text(b, column).as_deref().and_then(numeric_key);
            directed(a_key.cmp(&b_key), order.direction())
        }),
    }
}

fn directed(ordering: Ordering, direction: Direction) -> Ordering {
    match direction {
        Direction::Asc => ordering,
        Direction::Desc => ordering.reverse(),
    }
}

/// Returns the display text of a cell; `None` for missing or null fields,
/// which sort first ascending and never match a LIKE pattern.
fn cell_text(row: &Row, column: &str) -> Option<String> {
    match row.get(column) {
        None | Some(CellValue::Null) => None,
        Some(value) => Some(value.to_string()),
    }
}

/// Reads a cell as a calendar date, truncating any time-of-day.
fn cell_date(row: &Row, column: &str) -> Option<NaiveDate> {
    match row.get(column)? {
        CellValue::Date(date) => Some(*date),
        CellValue::DateTime(datetime) => Some(datetime.date_naive()),
        CellValue::String(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d").ok(),
        _ => None,
    }
}

/// Extracts the first run of ASCII digits as a sort key.
fn numeric_key(text: &str) -> Option<u64> {
    let mut seen = false;
    let mut key = 0u64;
    for ch in text.chars() {
        if let Some(digit) = ch.to_digit(10) {
            seen = true;
            key = key.saturating_mul(10).saturating_add(u64::from(digit));
        } else if seen {
            break;
        }
    }
    seen.then_some(key)
}

/// Evaluates a LIKE pattern, case-insensitively.
///
/// `%` matches any run of characters, `_` exactly one, and `\` escapes the
/// following character to its literal meaning.
fn like_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
    let text: Vec<char> = text.to_lowercase().chars().collect();
    like_match_at(&pattern, &text)
}

fn like_match_at(pattern: &[char], text: &[char]) -> bool {
    let Some((&first, rest)) = pattern.split_first() else {
        return text.is_empty();
    };
    match first {
        '%' => (0..=text.len()).any(|skip| like_match_at(rest, &text[skip..])),
        '_' => !text.is_empty() && like_match_at(rest, &text[1..]),
        '\\' => match rest.split_first() {
            Some((&literal, rest)) => {
                !text.is_empty() && text[0] == literal && like_match_at(rest, &text[1..])
            }
            // Dangling escape stands for a literal backslash.
            None => text.len() == 1 && text[0] == '\\',
        },
        _ => !text.is_empty() && text[0] == first && like_match_at(rest, &text[1..]),
    }
}
