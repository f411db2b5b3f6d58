use serde::Deserialize;
use serde::Serialize;

use crate::column::ColumnSet;
use crate::query::Direction;

/// Current sort selection: at most one column plus a direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortState {
    /// Sorted column name; `None` renders in source order.
    pub column: Option<String>,
    pub order: Direction,
}

impl SortState {
    /// Applies a header-click sort request.
    ///
    /// Unknown or unsortable columns leave the state untouched. Requesting
    /// the current column flips the direction; any other sortable column
    /// becomes the selection, ascending. Returns whether the state changed.
    pub fn request(&mut self, columns: &ColumnSet, name: &str) -> bool {
        if !columns.is_sortable(name) {
            return false;
        }
        if self.column.as_deref() == Some(name) {
            self.order = self.order.flip();
        } else {
            self.column = Some(name.to_string());
            self.order = Direction::Asc;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;

    fn columns() -> ColumnSet {
        let mut columns = ColumnSet::new();
        columns.add(Column::text("name", "Name").sortable()).unwrap();
        columns.add(Column::text("id", "Id").sortable()).unwrap();
        columns.add(Column::text("notes", "Notes")).unwrap();
        columns
    }

    #[test]
    fn test_unknown_column_is_a_no_op() {
        let mut sort = SortState::default();
        assert!(!sort.request(&columns(), "ghost"));
        assert_eq!(sort, SortState::default());
    }

    #[test]
    fn test_unsortable_column_is_a_no_op() {
        let mut sort = SortState {
            column: Some("name".into()),
            order: Direction::Desc,
        };
        assert!(!sort.request(&columns(), "notes"));
        assert_eq!(sort.column.as_deref(), Some("name"));
        assert_eq!(sort.order, Direction::Desc);
    }

    #[test]
    fn test_new_column_starts_ascending() {
        let mut sort = SortState::default();
        assert!(sort.request(&columns(), "name"));
        assert_eq!(sort.column.as_deref(), Some("name"));
        assert_eq!(sort.order, Direction::Asc);
    }

    #[test]
    fn test_same_column_flips_direction() {
        let mut sort = SortState::default();
        sort.request(&columns(), "name");
        assert!(sort.request(&columns(), "name"));
        assert_eq!(sort.order, Direction::Desc);
        assert!(sort.request(&columns(), "name"));
        assert_eq!(sort.order, Direction::Asc);
    }

    #[test]
    fn test_switching_columns_resets_to_ascending() {
        let mut sort = SortState::default();
        sort.request(&columns(), "name");
        sort.request(&columns(), "name");
        assert_eq!(sort.order, Direction::Desc);
        assert!(sort.request(&columns(), "id"));
        assert_eq!(sort.column.as_deref(), Some("id"));
        assert_eq!(sort.order, Direction::Asc);
    }
}
