//! Record and value model

mod record;
mod record_serde;
mod row;
mod value;

pub use record::*;
pub use row::*;
pub use value::*;
