//! Projection: the header/body cell matrix handed to renderers.

use crate::column::Column;
use crate::column::ColumnWidth;
use crate::model::Row;
use crate::sort::Direction;
use crate::sort::SortEngine;

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Field this column displays.
    pub field: String,
    /// Header text.
    pub label: String,
    /// Whether this is the active sort column.
    pub active: bool,
    /// Sort direction, set only on the active column.
    pub direction: Option<Direction>,
    /// Width hint from the column spec.
    pub width: ColumnWidth,
}

/// A rendered snapshot of a table.
///
/// Every row has exactly one cell per header entry, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    pub header: Vec<HeaderCell>,
    pub rows: Vec<Vec<String>>,
}

impl Projection {
    /// Project `records` in the engine's current order through `columns`.
    ///
    /// Formatters run synchronously; a panicking formatter aborts the whole
    /// pass and no partial projection is returned.
    pub fn build<R: Row>(columns: &[Column], engine: &SortEngine, records: &[R]) -> Self {
        let header = columns
            .iter()
            .map(|column| {
                let active = engine.status().is_active(&column.field);
                HeaderCell {
                    field: column.field.clone(),
                    label: column.spec.label.clone(),
                    active,
                    direction: active.then(|| engine.direction()),
                    width: column.spec.width_hint(),
                }
            })
            .collect();

        let rows = engine
            .order()
            .iter()
            .filter_map(|&index| records.get(index))
            .map(|record| {
                columns
                    .iter()
                    .map(|column| {
                        let value = record.value(&column.field).unwrap_or_default();
                        column.spec.format(&value)
                    })
                    .collect()
            })
            .collect::<Vec<Vec<String>>>();

        log::trace!(
            "[projection] {} columns x {} rows",
            columns.len(),
            rows.len()
        );

        Self { header, rows }
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Number of body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The active sort column, if any.
    pub fn active_column(&self) -> Option<&HeaderCell> {
        self.header.iter().find(|cell| cell.active)
    }

    /// Header labels in column order.
    pub fn labels(&self) -> Vec<&str> {
        self.header.iter().map(|cell| cell.label.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnRegistry;
    use crate::column::ColumnSpec;
    use crate::model::Record;

    fn columns() -> Vec<Column> {
        ColumnRegistry::new()
            .column("name", ColumnSpec::new("名前"))
            .column(
                "age",
                ColumnSpec::new("年齢")
                    .formatter(|v| format!("{}歳", v))
                    .width(ColumnWidth::Fixed(6)),
            )
            .columns()
            .to_vec()
    }

    fn data() -> Vec<Record> {
        vec![
            Record::new().set("name", "hoge").set("age", 12),
            Record::new().set("name", "fuga").set("age", 23),
        ]
    }

    #[test]
    fn test_unsorted_projection() {
        let engine = SortEngine::new(2);
        let projection = Projection::build(&columns(), &engine, &data());

        assert_eq!(projection.labels(), vec!["名前", "年齢"]);
        assert!(projection.header.iter().all(|cell| !cell.active));
        assert!(projection.header.iter().all(|cell| cell.direction.is_none()));
        assert_eq!(projection.header[1].width, ColumnWidth::Fixed(6));
        assert_eq!(
            projection.rows,
            vec![vec!["hoge", "12歳"], vec!["fuga", "23歳"]]
        );
    }

    #[test]
    fn test_active_header_carries_direction() {
        let mut engine = SortEngine::new(2);
        engine.select_field("name", &columns(), &data()).unwrap();
        engine.toggle_direction();
        let projection = Projection::build(&columns(), &engine, &data());

        let active = projection.active_column().unwrap();
        assert_eq!(active.field, "name");
        assert_eq!(active.direction, Some(Direction::Descending));
        assert_eq!(projection.header.iter().filter(|c| c.active).count(), 1);
    }

    #[test]
    fn test_missing_field_renders_as_null() {
        let engine = SortEngine::new(1);
        let records = vec![Record::new().set("name", "hoge")];
        let projection = Projection::build(&columns(), &engine, &records);
        assert_eq!(projection.rows, vec![vec!["hoge", "歳"]]);
    }

    #[test]
    fn test_rows_align_with_header() {
        let engine = SortEngine::new(2);
        let projection = Projection::build(&columns(), &engine, &data());
        assert!(projection.rows.iter().all(|row| row.len() == projection.column_count()));
        assert_eq!(projection.row_count(), 2);
    }
}
