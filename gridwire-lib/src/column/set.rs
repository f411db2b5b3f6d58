use crate::error::GridError;

use super::Column;

/// Ordered, uniquely-named collection of columns.
///
/// Registration order is display order. Append-only: columns are never
/// replaced or removed once added.
#[derive(Debug, Clone, Default)]
pub struct ColumnSet {
    columns: Vec<Column>,
}

impl ColumnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column, rejecting duplicate names and leaving the set
    /// unchanged on error.
    pub fn add(&mut self, column: Column) -> Result<(), GridError> {
        if self.contains(column.name()) {
            return Err(GridError::duplicate_column(column.name()));
        }
        self.columns.push(column);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Whether `name` is a registered, sortable column.
    pub fn is_sortable(&self, name: &str) -> bool {
        self.get(name).is_some_and(Column::is_sortable)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_registration_order() {
        let mut columns = ColumnSet::new();
        columns.add(Column::text("b", "B")).unwrap();
        columns.add(Column::text("a", "A")).unwrap();
        let names: Vec<&str> = columns.iter().map(Column::name).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut columns = ColumnSet::new();
        columns.add(Column::text("id", "Id")).unwrap();
        let err = columns.add(Column::date("id", "Id Again")).unwrap_err();
        assert!(matches!(err, GridError::DuplicateColumn { name } if name == "id"));
        assert_eq!(columns.len(), 1);
    }

    #[test]
    fn test_sortable_lookup() {
        let mut columns = ColumnSet::new();
        columns.add(Column::text("name", "Name").sortable()).unwrap();
        columns.add(Column::text("notes", "Notes")).unwrap();
        assert!(columns.is_sortable("name"));
        assert!(!columns.is_sortable("notes"));
        assert!(!columns.is_sortable("missing"));
    }
}
