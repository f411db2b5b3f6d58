//! Filter predicates applied to the abstract query.

use chrono::NaiveDate;

/// A declarative filter condition for narrowing query results.
///
/// Predicates are produced by the column filters and handed to
/// [`Query::filter`](super::Query::filter); the backend decides how to
/// evaluate them. Date predicates compare by calendar date, ignoring any
/// time-of-day the stored value carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Substring match with `%`/`_` wildcards and `\` as the escape character.
    Like { column: String, pattern: String },
    /// Calendar-date equality: `DATE(column) = date`.
    DateEquals { column: String, date: NaiveDate },
    /// Calendar date within `[from, to]`, inclusive on both ends.
    DateBetween {
        column: String,
        from: NaiveDate,
        to: NaiveDate,
    },
    /// Calendar date on or after `from`.
    DateOnOrAfter { column: String, from: NaiveDate },
    /// Calendar date on or before `to`.
    DateOnOrBefore { column: String, to: NaiveDate },
}

impl Predicate {
    /// Creates a LIKE predicate: `column LIKE pattern`.
    pub fn like(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        Predicate::Like {
            column: column.into(),
            pattern: pattern.into(),
        }
    }

    /// Creates a calendar-date equality predicate.
    pub fn date_equals(column: impl Into<String>, date: NaiveDate) -> Self {
        Predicate::DateEquals {
            column: column.into(),
            date,
        }
    }

    /// Creates an inclusive date range predicate.
    pub fn date_between(column: impl Into<String>, from: NaiveDate, to: NaiveDate) -> Self {
        Predicate::DateBetween {
            column: column.into(),
            from,
            to,
        }
    }

    /// Creates a lower-bound-only date predicate.
    pub fn date_on_or_after(column: impl Into<String>, from: NaiveDate) -> Self {
        Predicate::DateOnOrAfter {
            column: column.into(),
            from,
        }
    }

    /// Creates an upper-bound-only date predicate.
    pub fn date_on_or_before(column: impl Into<String>, to: NaiveDate) -> Self {
        Predicate::DateOnOrBefore {
            column: column.into(),
            to,
        }
    }

    /// Returns the column this predicate applies to.
    pub fn column(&self) -> &str {
        match self {
            Predicate::Like { column, .. }
            | Predicate::DateEquals { column, .. }
            | Predicate::DateBetween { column, .. }
            | Predicate::DateOnOrAfter { column, .. }
            | Predicate::DateOnOrBefore { column, .. } => column,
        }
    }
}
