//! The abstract query capability and its building blocks.
//!
//! The grid controller consumes a data source through the [`Query`] trait
//! only: a small immutable-builder surface of six operations (filter,
//! order_by, limit, offset, count, fetch_all). Predicates and order
//! expressions are declarative values, so a backend translates them into
//! whatever query language it speaks.
//!
//! [`MemoryQuery`] is the shipped in-memory implementation, used by tests
//! and the demo binary.

mod memory;
mod order;
mod predicate;
mod traits;

pub use memory::MemoryQuery;
pub use order::Direction;
pub use order::OrderExpr;
pub use order::OrderKind;
pub use predicate::Predicate;
pub use traits::Query;
