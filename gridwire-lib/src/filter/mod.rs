//! Column filter capabilities: substring text matching and calendar-date
//! ranges.

use chrono::NaiveDate;
use log::debug;

use crate::query::Predicate;
use crate::query::Query;

/// The form input a filter renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Date,
}

/// A filtering capability attached to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFilter {
    /// Case-insensitive substring match on the cell's display text.
    Text,
    /// A single calendar date, or a `from|to` range where either side may
    /// be empty.
    Date,
}

impl ColumnFilter {
    /// The input control this filter renders as.
    pub fn input_kind(&self) -> InputKind {
        match self {
            ColumnFilter::Text => InputKind::Text,
            ColumnFilter::Date => InputKind::Date,
        }
    }

    /// Narrows `query` by this filter's interpretation of `raw`.
    ///
    /// Empty or unusable input leaves the query untouched.
    pub fn apply<Q: Query>(&self, query: Q, column: &str, raw: &str) -> Q {
        if raw.is_empty() {
            return query;
        }
        match self {
            ColumnFilter::Text => {
                let pattern = format!("%{}%", escape_like(raw));
                query.filter(&Predicate::like(column, pattern))
            }
            ColumnFilter::Date => apply_date(query, column, raw),
        }
    }
}

fn apply_date<Q: Query>(query: Q, column: &str, raw: &str) -> Q {
    let Some((from, to)) = raw.split_once('|') else {
        return match parse_date(column, raw) {
            Some(date) => query.filter(&Predicate::date_equals(column, date)),
            None => query,
        };
    };
    match (parse_date(column, from), parse_date(column, to)) {
        (Some(from), Some(to)) => query.filter(&Predicate::date_between(column, from, to)),
        (Some(from), None) => query.filter(&Predicate::date_on_or_after(column, from)),
        (None, Some(to)) => query.filter(&Predicate::date_on_or_before(column, to)),
        (None, None) => query,
    }
}

/// Parses a `%Y-%m-%d` date, treating blank or malformed input as absent.
fn parse_date(column: &str, raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            debug!("Ignoring unparseable date filter value '{raw}' for column '{column}'");
            None
        }
    }
}

/// Escapes LIKE wildcards so user input matches literally.
///
/// ```
/// use gridwire_lib::filter::escape_like;
///
/// assert_eq!(escape_like("50% off"), "50\\% off");
/// ```
pub fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;
    use crate::query::MemoryQuery;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn people() -> MemoryQuery {
        MemoryQuery::new(vec![
            Row::new()
                .set("name", "Alice Smith")
                .set("joined", ymd(2024, 1, 10)),
            Row::new()
                .set("name", "Bob Jones")
                .set("joined", ymd(2024, 2, 20)),
            Row::new()
                .set("name", "Carol 100% Done")
                .set("joined", ymd(2024, 3, 30)),
        ])
    }

    #[test]
    fn test_escape_like_all_specials() {
        assert_eq!(escape_like("a%b_c\\d"), "a\\%b\\_c\\\\d");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_text_filter_is_substring() {
        let filtered = ColumnFilter::Text.apply(people(), "name", "smith");
        assert_eq!(filtered.count().unwrap(), 1);
    }

    #[test]
    fn test_text_filter_percent_is_literal() {
        let filtered = ColumnFilter::Text.apply(people(), "name", "100%");
        assert_eq!(filtered.count().unwrap(), 1);
        let filtered = ColumnFilter::Text.apply(people(), "name", "100x");
        assert_eq!(filtered.count().unwrap(), 0);
    }

    #[test]
    fn test_empty_value_is_a_no_op() {
        let filtered = ColumnFilter::Text.apply(people(), "name", "");
        assert_eq!(filtered.count().unwrap(), 3);
    }

    #[test]
    fn test_date_single_value_matches_calendar_date() {
        let filtered = ColumnFilter::Date.apply(people(), "joined", "2024-02-20");
        assert_eq!(filtered.count().unwrap(), 1);
    }

    #[test]
    fn test_date_range_inclusive() {
        let filtered = ColumnFilter::Date.apply(people(), "joined", "2024-01-10|2024-02-20");
        assert_eq!(filtered.count().unwrap(), 2);
    }

    #[test]
    fn test_date_open_ended_sides() {
        let after = ColumnFilter::Date.apply(people(), "joined", "2024-02-01|");
        assert_eq!(after.count().unwrap(), 2);
        let before = ColumnFilter::Date.apply(people(), "joined", "|2024-02-01");
        assert_eq!(before.count().unwrap(), 1);
    }

    #[test]
    fn test_date_sides_are_trimmed() {
        let filtered = ColumnFilter::Date.apply(people(), "joined", " 2024-01-10 | 2024-02-20 ");
        assert_eq!(filtered.count().unwrap(), 2);
    }

    #[test]
    fn test_malformed_date_side_is_absorbed() {
        let filtered = ColumnFilter::Date.apply(people(), "joined", "not-a-date|2024-02-20");
        assert_eq!(filtered.count().unwrap(), 2);
        let filtered = ColumnFilter::Date.apply(people(), "joined", "not-a-date|also-not");
        assert_eq!(filtered.count().unwrap(), 3);
        let filtered = ColumnFilter::Date.apply(people(), "joined", "nonsense");
        assert_eq!(filtered.count().unwrap(), 3);
    }

    #[test]
    fn test_input_kinds() {
        assert_eq!(ColumnFilter::Text.input_kind(), InputKind::Text);
        assert_eq!(ColumnFilter::Date.input_kind(), InputKind::Date);
    }
}
