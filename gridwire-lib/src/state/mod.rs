//! Round-trip grid state.
//!
//! Everything the grid needs to rebuild a page lives in [`GridState`]: the
//! sort selection, the page cursor and size, and the raw filter inputs. The
//! caller serializes it out with the response and hands it back on the next
//! request; the grid itself keeps no cross-request state.

mod filters;
mod paging;
mod sort;

pub use filters::*;
pub use paging::*;
pub use sort::*;

use serde::Deserialize;
use serde::Serialize;

/// Page selected before any navigation.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size applied before any page-size selection.
pub const DEFAULT_ITEMS_PER_PAGE: u64 = 20;

/// The serializable aggregate of one grid's request-scoped state.
///
/// Missing fields deserialize to their defaults, so a partial or first-visit
/// payload restores cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridState {
    pub sort: SortState,
    pub page: u64,
    /// Rows per page; 0 shows all rows on a single page.
    pub items_per_page: u64,
    pub filters: FilterValues,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            sort: SortState::default(),
            page: DEFAULT_PAGE,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            filters: FilterValues::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Direction;
    use std::collections::BTreeMap;

    #[test]
    fn test_state_round_trips_through_json() {
        let state = GridState {
            sort: SortState {
                column: Some("name".into()),
                order: Direction::Desc,
            },
            page: 3,
            items_per_page: 50,
            filters: FilterValues::from(BTreeMap::from([(
                "name".to_string(),
                "smith".to_string(),
            )])),
        };
        let json = serde_json::to_string(&state).unwrap();
        let restored: GridState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_direction_tokens_are_lowercase() {
        let state = GridState {
            sort: SortState {
                column: Some("id".into()),
                order: Direction::Desc,
            },
            ..GridState::default()
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"desc\""));
        assert!(!json.contains("DESC"));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let state: GridState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, GridState::default());
        assert_eq!(state.page, DEFAULT_PAGE);
        assert_eq!(state.items_per_page, DEFAULT_ITEMS_PER_PAGE);

        let state: GridState = serde_json::from_str(r#"{"page": 4}"#).unwrap();
        assert_eq!(state.page, 4);
        assert_eq!(state.items_per_page, DEFAULT_ITEMS_PER_PAGE);
    }
}
