//! The grid controller, its inbound signals, row actions and the rendered
//! view model.

mod action;
mod controller;
mod signal;
mod view;

pub use action::*;
pub use controller::*;
pub use signal::*;
pub use view::*;
