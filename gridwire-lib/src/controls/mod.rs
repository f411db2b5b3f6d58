//! Subordinate controls around the grid.
//!
//! Each control holds a read-only snapshot the grid pushes down after every
//! render and turns template interactions into typed [`GridSignal`]s. The
//! controls own no canonical state; the grid controller is the single owner
//! of sort, page and filter state.
//!
//! [`GridSignal`]: crate::grid::GridSignal

mod filter_form;
mod page_size;
mod paginator;

pub use filter_form::*;
pub use page_size::*;
pub use paginator::*;
