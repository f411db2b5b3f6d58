//! Error types

mod action;
mod field;
mod grid;
mod source;

pub use action::*;
pub use field::*;
pub use grid::*;
pub use source::*;
