//! Construction-time configuration errors

use crate::model::ValueKind;

/// Error raised while validating a column registry against a dataset.
///
/// All variants are fatal: a table that fails validation is never built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A field of the record shape has no column spec.
    #[error("No column spec registered for field '{field}'")]
    MissingColumnSpec { field: String },

    /// The dataset is empty, so its field shape cannot be derived.
    #[error("Dataset is empty; supply records or an explicit field list")]
    EmptyDataset,

    /// A record does not have the same fields as the first record.
    #[error("Record {row} has fields [{actual}], expected [{expected}]")]
    ShapeMismatch {
        row: usize,
        expected: String,
        actual: String,
    },

    /// A value does not match the kind declared on its column.
    #[error("Field '{field}' in record {row}: expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        row: usize,
        expected: ValueKind,
        actual: ValueKind,
    },
}

impl ConfigError {
    /// Creates a new missing column spec error.
    pub fn missing_column_spec(field: impl Into<String>) -> Self {
        Self::MissingColumnSpec {
            field: field.into(),
        }
    }

    /// Creates a new shape mismatch error.
    pub fn shape_mismatch(row: usize, expected: &[String], actual: &[String]) -> Self {
        Self::ShapeMismatch {
            row,
            expected: expected.join(", "),
            actual: actual.join(", "),
        }
    }
}
