//! Table: a validated dataset with its columns and sort state.

use crate::column::Column;
use crate::column::ColumnRegistry;
use crate::column::shape_of;
use crate::error::ConfigError;
use crate::error::SortError;
use crate::model::Row;
use crate::projection::Projection;
use crate::render::Renderer;
use crate::sort::SortEngine;
use crate::sort::SortStatus;

/// A user interaction with the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// A header was clicked: sort by it, or reverse it if already active.
    HeaderActivated(String),
    /// Clear the sort and return to natural order.
    Reset,
}

/// A sortable table over a homogeneous dataset.
///
/// The registry is validated once, at construction. After that every
/// transition produces a fresh [`Projection`].
///
/// # Example
///
/// ```
/// use sortgrid::Table;
/// use sortgrid::column::{ColumnRegistry, ColumnSpec};
/// use sortgrid::model::Record;
///
/// let registry = ColumnRegistry::new()
///     .column("name", ColumnSpec::new("名前"))
///     .column("age", ColumnSpec::new("年齢").formatter(|v| format!("{}歳", v)));
///
/// let data = vec![
///     Record::new().set("name", "hoge").set("age", 12),
///     Record::new().set("name", "fuga").set("age", 23),
/// ];
///
/// let mut table = Table::new(&registry, data).unwrap();
/// table.activate_header("age").unwrap();
/// let projection = table.activate_header("age").unwrap();
/// assert_eq!(projection.rows[0], vec!["fuga", "23歳"]);
/// ```
#[derive(Debug, Clone)]
pub struct Table<R> {
    columns: Vec<Column>,
    records: Vec<R>,
    engine: SortEngine,
}

impl<R: Row> Table<R> {
    /// Create a table, deriving the field shape from the first record.
    ///
    /// Fails with [`ConfigError::EmptyDataset`] if `records` is empty.
    pub fn new(registry: &ColumnRegistry, records: Vec<R>) -> Result<Self, ConfigError> {
        let fields = shape_of(&records)?;
        Self::build(registry, fields, records)
    }

    /// Create a table with an explicit field list. `records` may be empty.
    pub fn with_fields<I, S>(
        registry: &ColumnRegistry,
        fields: I,
        records: Vec<R>,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = fields.into_iter().map(Into::into).collect();
        Self::build(registry, fields, records)
    }

    fn build(
        registry: &ColumnRegistry,
        fields: Vec<String>,
        records: Vec<R>,
    ) -> Result<Self, ConfigError> {
        registry.validate_fields(&fields, &records)?;
        let columns = registry.resolve(&fields);

        log::debug!(
            "[table] Created with {} columns and {} records",
            columns.len(),
            records.len()
        );

        Ok(Self {
            engine: SortEngine::new(records.len()),
            columns,
            records,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Displayed columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The dataset in current display order.
    pub fn rows(&self) -> impl Iterator<Item = &R> {
        self.engine
            .order()
            .iter()
            .filter_map(|&index| self.records.get(index))
    }

    /// Current sort status.
    pub fn sort_status(&self) -> &SortStatus {
        self.engine.status()
    }

    /// The sort engine.
    pub fn engine(&self) -> &SortEngine {
        &self.engine
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Sort ascending by `field`. A no-op if `field` is already active.
    pub fn select_field(&mut self, field: &str) -> Result<Projection, SortError> {
        self.engine
            .select_field(field, &self.columns, &self.records)?;
        Ok(self.projection())
    }

    /// Reverse the active column's direction. A no-op if nothing is active.
    pub fn toggle_direction(&mut self) -> Projection {
        self.engine.toggle_direction();
        self.projection()
    }

    /// Handle a header click: select `field` if it is not active, otherwise
    /// toggle its direction.
    pub fn activate_header(&mut self, field: &str) -> Result<Projection, SortError> {
        if self.engine.status().is_active(field) {
            Ok(self.toggle_direction())
        } else {
            self.select_field(field)
        }
    }

    /// Clear the sort.
    pub fn reset(&mut self) -> Projection {
        self.engine.reset();
        self.projection()
    }

    /// Apply one event.
    pub fn handle(&mut self, event: &TableEvent) -> Result<Projection, SortError> {
        match event {
            TableEvent::HeaderActivated(field) => self.activate_header(field),
            TableEvent::Reset => Ok(self.reset()),
        }
    }

    /// Apply one event and paint the resulting projection.
    pub fn dispatch<P>(&mut self, event: &TableEvent, renderer: &mut P) -> Result<(), P::Error>
    where
        P: Renderer,
        P::Error: From<SortError>,
    {
        let projection = self.handle(event)?;
        renderer.paint(&projection)
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    /// Project the current state.
    pub fn projection(&self) -> Projection {
        Projection::build(&self.columns, &self.engine, &self.records)
    }

    /// Paint the current state.
    pub fn render<P: Renderer>(&self, renderer: &mut P) -> Result<(), P::Error> {
        renderer.paint(&self.projection())
    }
}
