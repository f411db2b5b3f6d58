//! Column definitions and the ordered column registry.

mod definition;
mod set;

pub use definition::*;
pub use set::*;
