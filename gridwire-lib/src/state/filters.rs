use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

/// Raw per-column filter inputs, keyed by column name.
///
/// Values round-trip verbatim, including empty strings, so the form can
/// re-render exactly what was submitted. Only non-empty values are applied
/// to the query or counted as active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterValues {
    values: BTreeMap<String, String>,
}

impl FilterValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored values with a fresh submission.
    pub fn set_values(&mut self, values: BTreeMap<String, String>) {
        self.values = values;
    }

    /// Drops all stored values.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// The non-empty value for `column`, if any.
    pub fn active(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|value| !value.is_empty())
    }

    /// Whether at least one stored value is non-empty.
    pub fn any_active(&self) -> bool {
        self.values.values().any(|value| !value.is_empty())
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<BTreeMap<String, String>> for FilterValues {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_round_trip_but_stay_inactive() {
        let mut filters = FilterValues::new();
        filters.set_values(BTreeMap::from([
            ("name".to_string(), String::new()),
            ("created".to_string(), "2024-01-01|".to_string()),
        ]));
        assert_eq!(filters.get("name"), Some(""));
        assert_eq!(filters.active("name"), None);
        assert_eq!(filters.active("created"), Some("2024-01-01|"));
        assert!(filters.any_active());
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut filters =
            FilterValues::from(BTreeMap::from([("name".to_string(), "x".to_string())]));
        assert!(filters.any_active());
        filters.clear();
        assert!(filters.is_empty());
        assert!(!filters.any_active());
    }

    #[test]
    fn test_set_values_replaces_not_merges() {
        let mut filters =
            FilterValues::from(BTreeMap::from([("a".to_string(), "1".to_string())]));
        filters.set_values(BTreeMap::from([("b".to_string(), "2".to_string())]));
        assert_eq!(filters.get("a"), None);
        assert_eq!(filters.get("b"), Some("2"));
    }
}
