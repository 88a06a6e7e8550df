//! Sort state machine for a table's row order.

mod direction;
mod engine;

pub use direction::*;
pub use engine::*;
