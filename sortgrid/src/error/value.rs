//! Value conversion errors

/// Error converting external data into a [`Value`](crate::model::Value).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// Arrays and objects cannot be table cells.
    #[error("Unsupported {kind} value for field '{field}'")]
    Unsupported { field: String, kind: &'static str },

    /// A JSON number that fits neither `i64` nor `f64`.
    #[error("Number out of range for field '{field}'")]
    NumberOutOfRange { field: String },
}
