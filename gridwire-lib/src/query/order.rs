//! Ordering types for the abstract query.

use serde::Deserialize;
use serde::Serialize;

/// Sort direction for ordering results.
///
/// Serializes as the lowercase tokens `asc`/`desc`, which is also the form
/// round-tripped through request parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn flip(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    /// Returns the round-trip token for this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }

    /// Parses a round-tripped order token, ASCII case-insensitively.
    ///
    /// Anything other than `asc`/`desc` is rejected with `None`.
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("asc") {
            Some(Direction::Asc)
        } else if token.eq_ignore_ascii_case("desc") {
            Some(Direction::Desc)
        } else {
            None
        }
    }
}

/// How an order expression derives its sort key from the column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    /// Plain lexicographic comparison of the column value.
    Lexicographic,
    /// Comparison by the first run of ASCII digits in the value
    /// ("natural" ordering, so `INV-9` sorts before `INV-10`).
    NumericSubstring,
}

/// A single-column ordering applied to a query.
///
/// Backends that cannot express a kind (typically [`OrderKind::NumericSubstring`])
/// report [`UnsupportedOrder`](crate::error::UnsupportedOrder) from
/// [`Query::order_by`](super::Query::order_by); the grid then falls back to a
/// lexicographic expression on the same column and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderExpr {
    column: String,
    direction: Direction,
    kind: OrderKind,
}

impl OrderExpr {
    /// Creates a lexicographic ordering on a column.
    pub fn lexicographic(column: impl Into<String>, direction: Direction) -> Self {
        Self {
            column: column.into(),
            direction,
            kind: OrderKind::Lexicographic,
        }
    }

    /// Creates a numeric-substring ordering on a column.
    pub fn numeric_substring(column: impl Into<String>, direction: Direction) -> Self {
        Self {
            column: column.into(),
            direction,
            kind: OrderKind::NumericSubstring,
        }
    }

    /// Returns the ordered column name.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Returns the sort direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns how the sort key is derived.
    pub fn kind(&self) -> OrderKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip() {
        assert_eq!(Direction::Asc.flip(), Direction::Desc);
        assert_eq!(Direction::Desc.flip(), Direction::Asc);
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(Direction::parse("asc"), Some(Direction::Asc));
        assert_eq!(Direction::parse("DESC"), Some(Direction::Desc));
        assert_eq!(Direction::parse("Asc"), Some(Direction::Asc));
        assert_eq!(Direction::parse("ascending"), None);
        assert_eq!(Direction::parse(""), None);
    }

    #[test]
    fn test_token_round_trip() {
        assert_eq!(Direction::parse(Direction::Asc.as_str()), Some(Direction::Asc));
        assert_eq!(Direction::parse(Direction::Desc.as_str()), Some(Direction::Desc));
    }
}
