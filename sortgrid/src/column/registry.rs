//! ColumnRegistry: the field name to ColumnSpec mapping, and its validation.

use crate::error::ConfigError;
use crate::model::Row;

use super::ColumnSpec;

/// A field bound to its display configuration.
#[derive(Debug, Clone)]
pub struct Column {
    /// Field name in the record shape.
    pub field: String,
    /// Display configuration.
    pub spec: ColumnSpec,
}

/// Ordered mapping from field name to [`ColumnSpec`].
///
/// Insertion order is column display order. Registering a field twice replaces
/// its spec and keeps its original position.
///
/// # Example
///
/// ```
/// use sortgrid::column::{ColumnRegistry, ColumnSpec};
/// use sortgrid::model::Record;
///
/// let registry = ColumnRegistry::new()
///     .column("name", ColumnSpec::new("名前"))
///     .column("age", ColumnSpec::new("年齢"));
///
/// let data = vec![Record::new().set("name", "hoge").set("age", 12)];
/// assert!(registry.validate(&data).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColumnRegistry {
    columns: Vec<Column>,
}

impl ColumnRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a column, returning the registry for chaining.
    pub fn column(mut self, field: impl Into<String>, spec: ColumnSpec) -> Self {
        self.insert(field, spec);
        self
    }

    /// Registers a column in place.
    pub fn insert(&mut self, field: impl Into<String>, spec: ColumnSpec) {
        let field = field.into();
        match self.columns.iter_mut().find(|c| c.field == field) {
            Some(column) => column.spec = spec,
            None => self.columns.push(Column { field, spec }),
        }
    }

    /// Returns the spec registered for a field.
    pub fn get(&self, field: &str) -> Option<&ColumnSpec> {
        self.columns
            .iter()
            .find(|c| c.field == field)
            .map(|c| &c.spec)
    }

    /// Returns `true` if the field has a spec.
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// All registered columns in insertion order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the number of registered columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if no columns are registered.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Validates the registry against a dataset whose shape is taken from the
    /// first record.
    ///
    /// Fails with [`ConfigError::EmptyDataset`] if there are no records.
    pub fn validate<R: Row>(&self, records: &[R]) -> Result<(), ConfigError> {
        let shape = shape_of(records)?;
        self.validate_fields(&shape, records)
    }

    /// Validates the registry against an explicit field list.
    ///
    /// An empty dataset is accepted here because the shape is given. Every
    /// record must have exactly the listed fields, and every value must match
    /// the kind its column declares.
    pub fn validate_fields<R: Row>(
        &self,
        fields: &[String],
        records: &[R],
    ) -> Result<(), ConfigError> {
        if let Some(missing) = fields.iter().find(|f| !self.contains(f)) {
            return Err(ConfigError::missing_column_spec(missing.as_str()));
        }

        let mut expected: Vec<&str> = fields.iter().map(String::as_str).collect();
        expected.sort_unstable();

        for (row, record) in records.iter().enumerate() {
            let mut actual = record.field_names();
            actual.sort_unstable();
            if actual != expected {
                let actual: Vec<String> = record.field_names().iter().map(|s| s.to_string()).collect();
                return Err(ConfigError::shape_mismatch(row, fields, &actual));
            }

            for field in fields {
                let Some(kind) = self.get(field).and_then(ColumnSpec::declared_kind) else {
                    continue;
                };
                let Some(value) = record.value(field) else {
                    continue;
                };
                if !value.is_null() && !kind.accepts(value.kind()) {
                    return Err(ConfigError::TypeMismatch {
                        field: field.clone(),
                        row,
                        expected: kind,
                        actual: value.kind(),
                    });
                }
            }
        }

        Ok(())
    }

    /// The displayed columns for a shape: registry order, restricted to fields
    /// present in the shape.
    pub(crate) fn resolve(&self, fields: &[String]) -> Vec<Column> {
        self.columns
            .iter()
            .filter(|column| {
                let present = fields.contains(&column.field);
                if !present {
                    log::warn!(
                        "[columns] Skipping '{}': field not present in record shape",
                        column.field
                    );
                }
                present
            })
            .cloned()
            .collect()
    }
}

/// Derives the field shape from the first record.
pub(crate) fn shape_of<R: Row>(records: &[R]) -> Result<Vec<String>, ConfigError> {
    let first = records.first().ok_or(ConfigError::EmptyDataset)?;
    Ok(first.field_names().into_iter().map(str::to_string).collect())
}
