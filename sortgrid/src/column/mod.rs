//! Column configuration: per-field labels, formatters and comparators.

mod registry;
mod spec;

pub use registry::*;
pub use spec::*;
