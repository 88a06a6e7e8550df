//! Sort transition errors

/// Error returned by a sort transition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// The requested field is not one of the table's columns.
    #[error("Field '{field}' is not a column of this table")]
    UnknownField { field: String },
}

impl SortError {
    /// Creates a new unknown field error.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }
}
