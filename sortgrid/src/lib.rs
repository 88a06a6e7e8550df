//! Sortable table core
//!
//! Turns a homogeneous dataset and a per-field column configuration into a
//! header/body cell matrix, with click-to-sort on any column.
//!
//! - [`column`]: labels, formatters and comparators per field, validated once.
//! - [`sort`]: the sort state machine and materialized row order.
//! - [`projection`]: the cell matrix handed to a [`Renderer`].

pub mod column;
pub mod error;
pub mod model;
pub mod projection;
pub mod render;
pub mod sort;

mod table;

pub use error::Error;
pub use projection::{HeaderCell, Projection};
pub use render::Renderer;
pub use table::*;
