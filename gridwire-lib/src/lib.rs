//! Server-side data grid core
//!
//! Renders a paginated, sortable, filterable view over an abstract query
//! source and dispatches row-level actions, with all state round-tripped
//! per request.

pub mod column;
pub mod controls;
pub mod error;
pub mod filter;
pub mod grid;
pub mod model;
pub mod query;
pub mod state;

pub use grid::Grid;
pub use grid::GridSignal;
pub use grid::GridView;
pub use state::GridState;
